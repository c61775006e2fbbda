//! Display rows built from state, ready for a renderer to lay out.

use chrono::NaiveDate;

use crate::{
    condition::{IconCategory, weather_icon_category},
    format::{
        format_clock, format_day, format_distance, format_percent, format_pressure, format_time,
        format_today, format_wind, primary_temperature, secondary_temperature, visibility_km,
    },
    model::Forecast,
    state::CityRecord,
    units::Settings,
};

/// Days listed on the weather tab.
pub const WEATHER_FORECAST_DAYS: usize = 7;
/// Days listed in the city detail.
pub const CITY_FORECAST_DAYS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub day: String,
    pub icon: IconCategory,
    pub main: String,
    pub description: String,
    /// `"max / min"` in the primary temperature unit.
    pub high_low: String,
}

pub fn forecast_rows(forecast: &Forecast, settings: &Settings, limit: usize) -> Vec<ForecastRow> {
    forecast
        .daily
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, day)| {
            let label = if idx == 0 {
                "Today".to_string()
            } else {
                format_day(Some(day.dt), Some(forecast.timezone_offset))
            };
            let condition = day.condition();
            let main = condition.map(|c| c.main.clone()).unwrap_or_default();

            ForecastRow {
                day: label,
                icon: weather_icon_category(Some(main.as_str())),
                description: condition.map(|c| c.description.clone()).unwrap_or_default(),
                main,
                high_low: format!(
                    "{} / {}",
                    primary_temperature(Some(day.temp.max), settings),
                    primary_temperature(Some(day.temp.min), settings)
                ),
            }
        })
        .collect()
}

/// Label/value pair for the summary block.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

impl SummaryRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub title: String,
    pub date: String,
    pub condition: String,
    pub icon: IconCategory,
    pub temperature: String,
    pub temperature_alt: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub summary: Vec<SummaryRow>,
    pub forecast: Vec<ForecastRow>,
}

impl WeatherPanel {
    pub fn build(city: &CityRecord, settings: &Settings, today: NaiveDate) -> Self {
        let now = &city.current;
        let main = city.condition_main.clone().unwrap_or_default();
        let description = city.condition_description.clone().unwrap_or_default();

        let mut summary = vec![
            SummaryRow::new("Pressure", format_pressure(now.main.pressure)),
            SummaryRow::new(
                "Visibility",
                format_distance(Some(visibility_km(now.visibility)), settings),
            ),
            SummaryRow::new("Cloudiness", format_percent(now.clouds.all.unwrap_or(0))),
        ];

        if let Some(forecast) = &city.forecast {
            let sun = forecast.current.clone().unwrap_or_default();
            let offset = Some(forecast.timezone_offset);
            summary.push(SummaryRow::new("Sunrise", format_time(sun.sunrise, offset)));
            summary.push(SummaryRow::new("Sunset", format_time(sun.sunset, offset)));
        }

        Self {
            title: city.title(),
            date: format_today(today),
            condition: format!("{main} · {description}"),
            icon: weather_icon_category(Some(main.as_str())),
            temperature: primary_temperature(Some(now.main.temp), settings),
            temperature_alt: secondary_temperature(Some(now.main.temp), settings),
            feels_like: primary_temperature(Some(now.main.feels_like), settings),
            humidity: format_percent(now.main.humidity),
            wind: format_wind(now.wind.speed, settings),
            summary,
            forecast: city
                .forecast
                .as_ref()
                .map(|f| forecast_rows(f, settings, WEATHER_FORECAST_DAYS))
                .unwrap_or_default(),
        }
    }
}

/// One line of the city history list.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRow {
    pub name: String,
    pub icon: IconCategory,
    pub time: String,
    pub temperature: String,
    pub selected: bool,
}

impl CityRow {
    pub fn build(city: &CityRecord, settings: &Settings, selected: bool) -> Self {
        Self {
            name: city.name.clone(),
            icon: weather_icon_category(city.condition_main.as_deref()),
            time: format_clock(&city.searched_at),
            temperature: primary_temperature(Some(city.temp_c), settings),
            selected,
        }
    }
}

/// Detail pane for the selected city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDetail {
    pub title: String,
    pub last_updated: String,
    pub icon: IconCategory,
    pub temperature: String,
    /// `None` until a forecast for this city has arrived.
    pub forecast: Option<Vec<ForecastRow>>,
}

impl CityDetail {
    pub fn build(city: &CityRecord, settings: &Settings) -> Self {
        Self {
            title: city.title(),
            last_updated: format_clock(&city.searched_at),
            icon: weather_icon_category(city.condition_main.as_deref()),
            temperature: primary_temperature(Some(city.temp_c), settings),
            forecast: city
                .forecast
                .as_ref()
                .map(|f| forecast_rows(f, settings, CITY_FORECAST_DAYS)),
        }
    }
}
