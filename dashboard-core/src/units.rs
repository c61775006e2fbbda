use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

const MS_TO_KMH: f64 = 3.6;
const MS_TO_MPH: f64 = 2.23694;
const KM_TO_MILES: f64 = 0.621371;

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn ms_to_kmh(v: f64) -> f64 {
    v * MS_TO_KMH
}

pub fn ms_to_mph(v: f64) -> f64 {
    v * MS_TO_MPH
}

pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "celsius",
            TempUnit::Fahrenheit => "fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    /// The unit shown next to the primary reading.
    pub fn other(&self) -> TempUnit {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    /// Convert a Celsius reading into this unit.
    pub fn from_celsius(&self, c: f64) -> f64 {
        match self {
            TempUnit::Celsius => c,
            TempUnit::Fahrenheit => celsius_to_fahrenheit(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    /// Provider native unit.
    #[default]
    Ms,
    Kmh,
    Mph,
}

impl WindUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindUnit::Ms => "ms",
            WindUnit::Kmh => "kmh",
            WindUnit::Mph => "mph",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WindUnit::Ms => "m/s",
            WindUnit::Kmh => "km/h",
            WindUnit::Mph => "mph",
        }
    }

    pub fn from_ms(&self, v: f64) -> f64 {
        match self {
            WindUnit::Ms => v,
            WindUnit::Kmh => ms_to_kmh(v),
            WindUnit::Mph => ms_to_mph(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Mi => "mi",
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.as_str()
    }

    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Km => km,
            DistanceUnit::Mi => km_to_miles(km),
        }
    }
}

macro_rules! unit_str_impls {
    ($ty:ident, $label:literal, [$($variant:ident),+ $(,)?]) => {
        impl $ty {
            pub const fn all() -> &'static [$ty] {
                &[$($ty::$variant),+]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = anyhow::Error;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let lower = value.to_lowercase();

                $ty::all()
                    .iter()
                    .copied()
                    .find(|unit| unit.as_str() == lower)
                    .ok_or_else(|| {
                        let supported: Vec<&str> = $ty::all().iter().map(|u| u.as_str()).collect();
                        anyhow::anyhow!(
                            "Unknown {} unit '{value}'. Supported units: {}.",
                            $label,
                            supported.join(", ")
                        )
                    })
            }
        }
    };
}

unit_str_impls!(TempUnit, "temperature", [Celsius, Fahrenheit]);
unit_str_impls!(WindUnit, "wind speed", [Ms, Kmh, Mph]);
unit_str_impls!(DistanceUnit, "distance", [Km, Mi]);

/// User unit preferences. Every category always carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub temp_unit: TempUnit,
    pub wind_unit: WindUnit,
    pub distance_unit: DistanceUnit,
}

impl Settings {
    pub fn with_temp_unit(mut self, unit: TempUnit) -> Self {
        self.temp_unit = unit;
        self
    }

    pub fn with_wind_unit(mut self, unit: WindUnit) -> Self {
        self.wind_unit = unit;
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn celsius_to_fahrenheit_known_points() {
        assert!(close(celsius_to_fahrenheit(0.0), 32.0));
        assert!(close(celsius_to_fahrenheit(100.0), 212.0));
        assert!(close(celsius_to_fahrenheit(-40.0), -40.0));
    }

    #[test]
    fn wind_conversions() {
        assert!(close(ms_to_kmh(10.0), 36.0));
        assert!(close(ms_to_mph(10.0), 22.3694));
        assert!(close(WindUnit::Ms.from_ms(7.5), 7.5));
    }

    #[test]
    fn km_to_miles_five_km() {
        assert!(close(km_to_miles(5.0), 3.106855));
    }

    #[test]
    fn settings_default_is_native_units() {
        let s = Settings::default();
        assert_eq!(s.temp_unit, TempUnit::Celsius);
        assert_eq!(s.wind_unit, WindUnit::Ms);
        assert_eq!(s.distance_unit, DistanceUnit::Km);
    }

    #[test]
    fn unit_parsing_is_case_insensitive() {
        assert_eq!(TempUnit::try_from("Fahrenheit").unwrap(), TempUnit::Fahrenheit);
        assert_eq!(WindUnit::try_from("KMH").unwrap(), WindUnit::Kmh);
        assert_eq!(DistanceUnit::try_from("mi").unwrap(), DistanceUnit::Mi);
    }

    #[test]
    fn unknown_unit_error_lists_supported() {
        let err = WindUnit::try_from("knots").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown wind speed unit 'knots'"));
        assert!(msg.contains("ms, kmh, mph"));
    }

    #[test]
    fn other_temp_unit_flips() {
        assert_eq!(TempUnit::Celsius.other(), TempUnit::Fahrenheit);
        assert_eq!(TempUnit::Fahrenheit.other(), TempUnit::Celsius);
    }

    #[test]
    fn settings_deserialize_with_missing_fields() {
        let s: Settings = serde_json::from_str(r#"{"wind_unit":"mph"}"#).unwrap();
        assert_eq!(s, Settings::default().with_wind_unit(WindUnit::Mph));
    }
}
