use serde::{Deserialize, Serialize};

/// Icon family for a provider condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Cloud,
    Rain,
    Thunderstorm,
    Snow,
    Clear,
    #[default]
    Default,
}

impl IconCategory {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Cloud => "☁️",
            IconCategory::Rain => "🌧️",
            IconCategory::Thunderstorm => "⛈️",
            IconCategory::Snow => "❄️",
            IconCategory::Clear => "☀️",
            IconCategory::Default => "🌤️",
        }
    }
}

/// Map a free-text condition ("light rain", "Clouds", ...) to an icon family.
///
/// Matching is case-insensitive by substring, checked in order, so
/// "thunderstorm with rain" lands on `Rain`.
pub fn weather_icon_category(label: Option<&str>) -> IconCategory {
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return IconCategory::Default;
    };
    let m = label.to_lowercase();

    if m.contains("cloud") {
        IconCategory::Cloud
    } else if m.contains("rain") || m.contains("drizzle") {
        IconCategory::Rain
    } else if m.contains("thunder") {
        IconCategory::Thunderstorm
    } else if m.contains("snow") {
        IconCategory::Snow
    } else if m.contains("clear") {
        IconCategory::Clear
    } else {
        IconCategory::Default
    }
}

/// True when the label describes wet weather (rain, drizzle or thunder).
pub fn is_wet(label: &str) -> bool {
    let m = label.to_lowercase();
    m.contains("rain") || m.contains("drizzle") || m.contains("thunder")
}
