//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Unit conversion and display formatting of provider measurements
//! - Condition label to icon mapping
//! - The OpenWeather client and provider abstraction
//! - Explicit application state driven by actions
//! - Configuration handling
//!
//! It is used by `dashboard-cli`, but the formatting layer has no I/O and can
//! be reused by any renderer.

pub mod condition;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod state;
pub mod theme;
pub mod units;
pub mod view;

pub use condition::{IconCategory, weather_icon_category};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::FetchError;
pub use model::{Coord, CurrentConditions, Forecast};
pub use provider::{WeatherProvider, provider_from_config};
pub use state::{Action, AppState, CityRecord, Effect, Tab};
pub use theme::{Theme, ThemeColor, ThemeMode};
pub use units::{DistanceUnit, Settings, TempUnit, WindUnit};
