//! Plain-text rendering of dashboard views.

use chrono::NaiveDate;
use dashboard_core::{
    AppState, Settings, Theme,
    format::primary_temperature,
    view::{CityDetail, CityRow, ForecastRow, WeatherPanel},
};

fn accent(theme: &Theme, text: &str) -> String {
    let (r, g, b) = theme.color.accent_rgb();
    format!("\x1b[1;38;2;{r};{g};{b}m{text}\x1b[0m")
}

fn forecast_lines(rows: &[ForecastRow]) {
    for row in rows {
        println!(
            "  {:<6} {} {:<14} {:<22} {}",
            row.day,
            row.icon.glyph(),
            row.main,
            row.description,
            row.high_low
        );
    }
}

pub fn weather_tab(state: &AppState, today: NaiveDate) {
    if let Some(error) = &state.error {
        eprintln!("{error}");
        return;
    }

    let Some(city) = state.current_city() else {
        println!("Start by searching for a city to see the weather details.");
        return;
    };

    let panel = WeatherPanel::build(city, &state.settings, today);

    println!("{}", accent(&state.theme, &panel.title));
    println!("{}", panel.date);
    println!("{} {}", panel.icon.glyph(), panel.condition);
    println!("{}  ({})", panel.temperature, panel.temperature_alt);
    println!();
    println!("  Feels like  {}", panel.feels_like);
    println!("  Humidity    {}", panel.humidity);
    println!("  Wind        {}", panel.wind);
    println!();
    println!("TODAY'S SUMMARY");
    for row in &panel.summary {
        println!("  {:<11} {}", row.label, row.value);
    }
    println!();
    println!("7-DAY FORECAST");
    if panel.forecast.is_empty() {
        println!("  Forecast unavailable.");
    } else {
        forecast_lines(&panel.forecast);
    }
}

pub fn cities_tab(state: &AppState) {
    if state.cities().is_empty() {
        println!("No cities yet. Search some cities and they will show up here.");
        return;
    }

    let selected = state.selected_city().map(|c| c.id);
    for city in state.cities() {
        let row = CityRow::build(city, &state.settings, selected == Some(city.id));
        let marker = if row.selected { ">" } else { " " };
        println!(
            "{marker} {} {:<20} {}  {}",
            row.icon.glyph(),
            row.name,
            row.time,
            row.temperature
        );
    }

    if let Some(city) = state.selected_city() {
        let detail = CityDetail::build(city, &state.settings);
        println!();
        println!("{}", accent(&state.theme, &detail.title));
        println!("Last updated: {}", detail.last_updated);
        println!("{} {}", detail.icon.glyph(), detail.temperature);
        println!();
        println!("3-DAY FORECAST");
        match &detail.forecast {
            Some(rows) => forecast_lines(rows),
            None => println!("  Forecast not loaded for this city."),
        }
    }
}

pub fn map_tab(state: &AppState) {
    let center = state.map_center();
    println!("Map centre: {:.4}, {:.4}", center.lat, center.lon);

    let selected = state.selected_city().map(|c| c.id);
    for city in state.cities() {
        let marker = if selected == Some(city.id) { "*" } else { " " };
        println!(
            "{marker} {:<20} {:>9.4} {:>10.4}  {}",
            city.name,
            city.coord.lat,
            city.coord.lon,
            primary_temperature(Some(city.temp_c), &state.settings)
        );
    }
}

pub fn settings(settings: &Settings) {
    println!("Temperature: {}", settings.temp_unit);
    println!("Wind speed:  {}", settings.wind_unit.symbol());
    println!("Distance:    {}", settings.distance_unit.symbol());
}
