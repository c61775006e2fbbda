//! OpenWeather payload shapes.
//!
//! The provider is always queried with `units=metric`, so temperatures are
//! Celsius, wind is m/s and visibility is metres.

use serde::{Deserialize, Serialize};

/// OpenWeather city id.
pub type CityId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionLabel {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Clouds {
    pub all: Option<u8>,
}

/// Response of the `/weather` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub sys: Sys,
    pub coord: Coord,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionLabel>,
    #[serde(default)]
    pub wind: Wind,
    pub visibility: Option<u32>,
    #[serde(default)]
    pub clouds: Clouds,
    pub dt: i64,
    pub timezone: Option<i64>,
}

impl CurrentConditions {
    pub fn condition(&self) -> Option<&ConditionLabel> {
        self.weather.first()
    }

    pub fn country(&self) -> Option<&str> {
        self.sys.country.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemp {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub dt: i64,
    pub temp: DailyTemp,
    #[serde(default)]
    pub weather: Vec<ConditionLabel>,
}

impl DailyForecast {
    pub fn condition(&self) -> Option<&ConditionLabel> {
        self.weather.first()
    }
}

/// Response of the `/onecall` endpoint with minutely, hourly and alerts excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub timezone_offset: i64,
    pub current: Option<SunTimes>,
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_payload() {
        let body = r#"{
            "coord": {"lon": 120.98, "lat": 14.6},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 29.4, "feels_like": 34.1, "temp_min": 28.0, "temp_max": 30.0,
                     "pressure": 1008, "humidity": 79},
            "visibility": 10000,
            "wind": {"speed": 4.1, "deg": 250},
            "clouds": {"all": 75},
            "dt": 1700000000,
            "sys": {"country": "PH", "sunrise": 1699999000, "sunset": 1700040000},
            "timezone": 28800,
            "id": 1701668,
            "name": "Manila",
            "cod": 200
        }"#;

        let parsed: CurrentConditions = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.id, 1701668);
        assert_eq!(parsed.country(), Some("PH"));
        assert_eq!(parsed.condition().map(|c| c.main.as_str()), Some("Rain"));
        assert_eq!(parsed.visibility, Some(10000));
        assert_eq!(parsed.clouds.all, Some(75));
    }

    #[test]
    fn optional_blocks_may_be_missing() {
        let body = r#"{
            "coord": {"lon": 0.0, "lat": 0.0},
            "main": {"temp": 1.0, "feels_like": 0.0, "pressure": 1000, "humidity": 50},
            "dt": 1700000000,
            "id": 1,
            "name": "Nowhere"
        }"#;

        let parsed: CurrentConditions = serde_json::from_str(body).unwrap();
        assert!(parsed.condition().is_none());
        assert_eq!(parsed.country(), None);
        assert_eq!(parsed.wind.speed, None);
        assert_eq!(parsed.visibility, None);
    }

    #[test]
    fn parses_forecast_payload() {
        let body = r#"{
            "lat": 14.6, "lon": 120.98, "timezone": "Asia/Manila", "timezone_offset": 28800,
            "current": {"dt": 1700000000, "sunrise": 1699999000, "sunset": 1700040000, "temp": 29.0},
            "daily": [
                {"dt": 1700020800, "temp": {"day": 30.0, "min": 25.1, "max": 31.2},
                 "weather": [{"main": "Clouds", "description": "overcast clouds"}]}
            ]
        }"#;

        let parsed: Forecast = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.timezone_offset, 28800);
        assert_eq!(parsed.current.as_ref().and_then(|c| c.sunrise), Some(1699999000));
        assert_eq!(parsed.daily.len(), 1);
        assert_eq!(parsed.daily[0].temp.max, 31.2);
    }
}
