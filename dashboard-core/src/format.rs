//! Display formatting for raw provider measurements.
//!
//! Every function here is total: missing input yields a placeholder string
//! instead of an error. Rounding happens only at this boundary, so a displayed
//! value converted back to the provider unit will generally not reproduce the
//! raw reading.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::units::Settings;

/// Placeholder shown when a measurement is missing.
pub const NO_DATA: &str = "-";

/// Round half toward positive infinity.
///
/// `f64::round` takes halves away from zero, so only negative halves need
/// nudging back up. Values too large to carry a fraction pass through as is.
fn round_half_up(v: f64) -> f64 {
    let r = v.round();
    if r - v == -0.5 { r + 1.0 } else { r }
}

fn round_display(v: f64) -> i64 {
    round_half_up(v) as i64
}

/// One decimal place, ties rounded up; `+ 0.0` clears a negative zero.
fn round_tenths(v: f64) -> f64 {
    round_half_up(v * 10.0) / 10.0 + 0.0
}

/// Temperature in the user's selected unit, e.g. `"21°C"`.
pub fn primary_temperature(celsius: Option<f64>, settings: &Settings) -> String {
    let Some(c) = celsius else {
        return NO_DATA.to_string();
    };
    let unit = settings.temp_unit;
    format!("{}{}", round_display(unit.from_celsius(c)), unit.symbol())
}

/// Temperature in the unit *not* selected; empty when there is no reading.
pub fn secondary_temperature(celsius: Option<f64>, settings: &Settings) -> String {
    let Some(c) = celsius else {
        return String::new();
    };
    let unit = settings.temp_unit.other();
    format!("{}{}", round_display(unit.from_celsius(c)), unit.symbol())
}

pub fn format_wind(speed_ms: Option<f64>, settings: &Settings) -> String {
    let Some(v) = speed_ms else {
        return NO_DATA.to_string();
    };
    let unit = settings.wind_unit;
    format!("{} {}", round_display(unit.from_ms(v)), unit.symbol())
}

pub fn format_distance(km: Option<f64>, settings: &Settings) -> String {
    let Some(km) = km else {
        return NO_DATA.to_string();
    };
    let unit = settings.distance_unit;
    format!("{:.1} {}", round_tenths(unit.from_km(km)), unit.symbol())
}

/// Shift a UNIX timestamp by a location offset and view it as civil time.
///
/// A zero timestamp counts as missing, matching how the provider leaves
/// unset fields.
fn local_civil_time(unix_seconds: Option<i64>, offset_seconds: Option<i64>) -> Option<DateTime<Utc>> {
    let ts = unix_seconds.filter(|ts| *ts != 0)?;
    let offset = offset_seconds?;
    DateTime::from_timestamp(ts.checked_add(offset)?, 0)
}

/// Local `HH:MM` at the location, independent of the host timezone.
pub fn format_time(unix_seconds: Option<i64>, offset_seconds: Option<i64>) -> String {
    local_civil_time(unix_seconds, offset_seconds)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Abbreviated weekday (`"Mon"`) at the location.
pub fn format_day(unix_seconds: Option<i64>, offset_seconds: Option<i64>) -> String {
    local_civil_time(unix_seconds, offset_seconds)
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_else(|| NO_DATA.to_string())
}

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

pub fn format_pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

/// Provider visibility is in metres; absent visibility reads as zero.
pub fn visibility_km(metres: Option<u32>) -> f64 {
    f64::from(metres.unwrap_or(0)) / 1000.0
}

/// Wall-clock time on the host, used for "last updated" labels.
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

/// Header date line, e.g. `"Monday, Oct 19"`.
pub fn format_today(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DistanceUnit, TempUnit, WindUnit};

    fn celsius() -> Settings {
        Settings::default()
    }

    fn fahrenheit() -> Settings {
        Settings::default().with_temp_unit(TempUnit::Fahrenheit)
    }

    #[test]
    fn primary_temperature_rounds_in_selected_unit() {
        assert_eq!(primary_temperature(Some(21.4), &celsius()), "21°C");
        assert_eq!(primary_temperature(Some(21.6), &celsius()), "22°C");
        // 21.4 * 9/5 + 32 = 70.52
        assert_eq!(primary_temperature(Some(21.4), &fahrenheit()), "71°F");
    }

    #[test]
    fn primary_temperature_missing_is_dash() {
        assert_eq!(primary_temperature(None, &celsius()), "-");
        assert_eq!(primary_temperature(None, &fahrenheit()), "-");
    }

    #[test]
    fn halves_round_up_and_negative_zero_is_plain() {
        assert_eq!(primary_temperature(Some(2.5), &celsius()), "3°C");
        assert_eq!(primary_temperature(Some(-2.5), &celsius()), "-2°C");
        assert_eq!(primary_temperature(Some(-0.4), &celsius()), "0°C");
    }

    #[test]
    fn secondary_temperature_uses_other_unit() {
        assert_eq!(secondary_temperature(Some(0.0), &celsius()), "32°F");
        assert_eq!(secondary_temperature(Some(0.0), &fahrenheit()), "0°C");
    }

    #[test]
    fn secondary_temperature_missing_is_empty() {
        assert_eq!(secondary_temperature(None, &celsius()), "");
        assert_eq!(secondary_temperature(None, &fahrenheit()), "");
    }

    #[test]
    fn wind_in_each_unit() {
        let s = Settings::default();
        assert_eq!(format_wind(Some(10.0), &s), "10 m/s");
        assert_eq!(format_wind(Some(10.0), &s.with_wind_unit(WindUnit::Kmh)), "36 km/h");
        assert_eq!(format_wind(Some(10.0), &s.with_wind_unit(WindUnit::Mph)), "22 mph");
        assert_eq!(format_wind(None, &s), "-");
    }

    #[test]
    fn distance_one_decimal() {
        let s = Settings::default();
        assert_eq!(format_distance(Some(5.0), &s), "5.0 km");
        assert_eq!(format_distance(Some(5.0), &s.with_distance_unit(DistanceUnit::Mi)), "3.1 mi");
        assert_eq!(format_distance(None, &s), "-");
    }

    #[test]
    fn distance_ties_round_up() {
        let s = Settings::default();
        let shown: Vec<String> = [250, 1250, 2250, 750]
            .into_iter()
            .map(|m| format_distance(Some(visibility_km(Some(m))), &s))
            .collect();
        assert_eq!(shown, ["0.3 km", "1.3 km", "2.3 km", "0.8 km"]);
        assert_eq!(format_distance(Some(-0.04), &s), "0.0 km");
    }

    #[test]
    fn large_integral_readings_are_not_shifted() {
        assert_eq!(
            primary_temperature(Some(4_503_599_627_370_497.0), &celsius()),
            "4503599627370497°C"
        );
        assert_eq!(format_wind(Some(0.49999999999999994), &Settings::default()), "0 m/s");
    }

    #[test]
    fn time_and_day_need_timestamp_and_offset() {
        assert_eq!(format_time(None, Some(0)), "-");
        assert_eq!(format_time(Some(0), Some(3600)), "-");
        assert_eq!(format_time(Some(1_700_000_000), None), "-");
        assert_eq!(format_day(Some(0), Some(0)), "-");
        assert_eq!(format_day(Some(1_700_000_000), None), "-");
    }

    #[test]
    fn time_applies_location_offset() {
        // 2023-11-14 22:13:20 UTC, a Tuesday.
        let ts = Some(1_700_000_000);
        assert_eq!(format_time(ts, Some(0)), "22:13");
        assert_eq!(format_day(ts, Some(0)), "Tue");
        // Manila, UTC+8: rolls over to Wednesday.
        assert_eq!(format_time(ts, Some(8 * 3600)), "06:13");
        assert_eq!(format_day(ts, Some(8 * 3600)), "Wed");
        // New York, UTC-5.
        assert_eq!(format_time(ts, Some(-5 * 3600)), "17:13");
    }

    #[test]
    fn formatting_is_repeatable() {
        let s = fahrenheit().with_wind_unit(WindUnit::Mph);
        let first = (primary_temperature(Some(12.3), &s), format_wind(Some(4.2), &s));
        let second = (primary_temperature(Some(12.3), &s), format_wind(Some(4.2), &s));
        assert_eq!(first, second);
    }

    #[test]
    fn rounded_display_does_not_round_trip() {
        // 21.4°C shows as 71°F, and 71°F is 21.67°C.
        let shown = primary_temperature(Some(21.4), &fahrenheit());
        assert_eq!(shown, "71°F");
        let back = (71.0 - 32.0) * 5.0 / 9.0;
        assert!((back - 21.4_f64).abs() > 0.1);
    }

    #[test]
    fn summary_helpers() {
        assert_eq!(format_percent(64), "64%");
        assert_eq!(format_pressure(1013), "1013 hPa");
        assert_eq!(visibility_km(Some(10_000)), 10.0);
        assert_eq!(visibility_km(None), 0.0);
    }

    #[test]
    fn today_header() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_today(date), "Monday, Oct 19");
    }
}
