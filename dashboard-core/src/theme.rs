use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Single,
    #[default]
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Single => "single",
            ThemeMode::Gradient => "gradient",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Single => "Single color",
            ThemeMode::Gradient => "Gradient",
        }
    }

    pub const fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Single, ThemeMode::Gradient]
    }
}

impl ThemeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::Blue => "blue",
            ThemeColor::Purple => "purple",
            ThemeColor::Green => "green",
            ThemeColor::Orange => "orange",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeColor::Blue => "Midnight Blue",
            ThemeColor::Purple => "Deep Purple",
            ThemeColor::Green => "Emerald",
            ThemeColor::Orange => "Amber",
        }
    }

    /// 24-bit accent used by terminal renderers.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        match self {
            ThemeColor::Blue => (56, 189, 248),
            ThemeColor::Purple => (167, 139, 250),
            ThemeColor::Green => (52, 211, 153),
            ThemeColor::Orange => (251, 191, 36),
        }
    }

    pub const fn all() -> &'static [ThemeColor] {
        &[
            ThemeColor::Blue,
            ThemeColor::Purple,
            ThemeColor::Green,
            ThemeColor::Orange,
        ]
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "single" => Ok(ThemeMode::Single),
            "gradient" => Ok(ThemeMode::Gradient),
            _ => Err(anyhow::anyhow!(
                "Unknown theme mode '{value}'. Supported modes: single, gradient."
            )),
        }
    }
}

impl TryFrom<&str> for ThemeColor {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();
        ThemeColor::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown theme color '{value}'. Supported colors: blue, purple, green, orange."
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub mode: ThemeMode,
    pub color: ThemeColor,
}

impl Theme {
    pub fn new(mode: ThemeMode, color: ThemeColor) -> Self {
        Self { mode, color }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.color.label(), self.mode.label().to_lowercase())
    }
}
