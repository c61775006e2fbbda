use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use dashboard_core::{
    Action, AppState, Config, Dashboard, DistanceUnit, Settings, Tab, TempUnit, Theme, ThemeColor,
    ThemeMode, WeatherProvider, WindUnit, provider_from_config,
};
use inquire::{Password, Select, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Unit overrides shared by commands that display weather.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UnitArgs {
    /// Temperature unit: celsius or fahrenheit.
    #[arg(long)]
    pub temp: Option<String>,

    /// Wind speed unit: ms, kmh or mph.
    #[arg(long)]
    pub wind: Option<String>,

    /// Distance unit: km or mi.
    #[arg(long)]
    pub distance: Option<String>,
}

impl UnitArgs {
    fn apply_to(&self, mut settings: Settings) -> Result<Settings> {
        if let Some(temp) = &self.temp {
            settings = settings.with_temp_unit(TempUnit::try_from(temp.as_str())?);
        }
        if let Some(wind) = &self.wind {
            settings = settings.with_wind_unit(WindUnit::try_from(wind.as_str())?);
        }
        if let Some(distance) = &self.distance {
            settings = settings.with_distance_unit(DistanceUnit::try_from(distance.as_str())?);
        }
        Ok(settings)
    }

    fn is_empty(&self) -> bool {
        self.temp.is_none() && self.wind.is_none() && self.distance.is_none()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather and forecast for a city.
    Show {
        /// City name, e.g. "Manila" or "London,GB".
        city: String,

        #[command(flatten)]
        units: UnitArgs,
    },

    /// Interactive session keeping a history of searched cities.
    Session {
        #[command(flatten)]
        units: UnitArgs,
    },

    /// Show or persist unit preferences.
    Units {
        #[command(flatten)]
        units: UnitArgs,
    },

    /// Show or persist the theme.
    Theme {
        /// single or gradient.
        #[arg(long)]
        mode: Option<String>,

        /// blue, purple, green or orange.
        #[arg(long)]
        color: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => configure(&mut config),
            Command::Show { city, units } => {
                let settings = units.apply_to(config.settings)?;
                let provider = provider_from_config(&config)?;
                let mut dash = Dashboard::new(provider, AppState::new(settings, config.theme));

                dash.search(&city).await;
                search_outcome(dash.state())?;
                render::weather_tab(dash.state(), Local::now().date_naive());
                Ok(())
            }
            Command::Session { units } => {
                let settings = units.apply_to(config.settings)?;
                let provider = provider_from_config(&config)?;
                let dash = Dashboard::new(provider, AppState::new(settings, config.theme));
                session(dash).await
            }
            Command::Units { units } => {
                if !units.is_empty() {
                    config.settings = units.apply_to(config.settings)?;
                    config.save()?;
                }
                render::settings(&config.settings);
                Ok(())
            }
            Command::Theme { mode, color } => {
                if mode.is_some() || color.is_some() {
                    if let Some(mode) = mode {
                        config.theme.mode = ThemeMode::try_from(mode.as_str())?;
                    }
                    if let Some(color) = color {
                        config.theme.color = ThemeColor::try_from(color.as_str())?;
                    }
                    config.save()?;
                }
                println!("Theme: {}", config.theme.label());
                Ok(())
            }
        }
    }
}

fn configure(config: &mut Config) -> Result<()> {
    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim().to_string();
    anyhow::ensure!(!key.is_empty(), "API key must not be empty");

    config.set_api_key(key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

const MENU_SEARCH: &str = "Search a city";
const MENU_WEATHER: &str = "Weather";
const MENU_CITIES: &str = "Cities";
const MENU_SELECT: &str = "Select a city";
const MENU_MAP: &str = "Map";
const MENU_UNITS: &str = "Units";
const MENU_THEME: &str = "Theme";
const MENU_QUIT: &str = "Quit";

async fn session<P: WeatherProvider>(mut dash: Dashboard<P>) -> Result<()> {
    let menu = vec![
        MENU_SEARCH,
        MENU_WEATHER,
        MENU_CITIES,
        MENU_SELECT,
        MENU_MAP,
        MENU_UNITS,
        MENU_THEME,
        MENU_QUIT,
    ];

    loop {
        let title = format!("{} {}", dash.state().logo(), dash.state().active_tab.label());
        let choice = Select::new(&title, menu.clone())
            .prompt()
            .context("Failed to read menu choice")?;

        match choice {
            MENU_SEARCH => {
                let query = Text::new("City:").prompt().context("Failed to read city")?;
                dash.dispatch(Action::TabSelected(Tab::Weather)).await;
                dash.search(&query).await;
                render::weather_tab(dash.state(), Local::now().date_naive());
            }
            MENU_WEATHER => {
                dash.dispatch(Action::TabSelected(Tab::Weather)).await;
                render::weather_tab(dash.state(), Local::now().date_naive());
            }
            MENU_CITIES => {
                dash.dispatch(Action::TabSelected(Tab::Cities)).await;
                render::cities_tab(dash.state());
            }
            MENU_SELECT => {
                let cities: Vec<String> = dash.state().cities().iter().map(|c| c.title()).collect();
                if cities.is_empty() {
                    println!("No cities yet. Search some cities first.");
                    continue;
                }
                let picked = Select::new("City:", cities)
                    .raw_prompt()
                    .context("Failed to read city choice")?;
                let id = dash.state().city_at(picked.index).map(|c| c.id);
                if let Some(id) = id {
                    dash.dispatch(Action::CitySelected(id)).await;
                }
                render::cities_tab(dash.state());
            }
            MENU_MAP => {
                dash.dispatch(Action::TabSelected(Tab::Map)).await;
                render::map_tab(dash.state());
            }
            MENU_UNITS => {
                let settings = prompt_settings(dash.state().settings)?;
                dash.dispatch(Action::SettingsChanged(settings)).await;
                render::settings(&dash.state().settings);
            }
            MENU_THEME => {
                dash.dispatch(Action::TabSelected(Tab::Theme)).await;
                let mode = prompt_theme_mode(dash.state().theme.mode)?;
                dash.dispatch(Action::ThemeModeChanged(mode)).await;
                let theme = prompt_theme_color(dash.state().theme)?;
                dash.dispatch(Action::ThemePicked(theme)).await;
                println!("Theme: {}", dash.state().theme.label());
            }
            _ => return Ok(()),
        }
    }
}

fn prompt_settings(current: Settings) -> Result<Settings> {
    let temp = Select::new("Temperature:", TempUnit::all().to_vec())
        .with_starting_cursor(index_of(TempUnit::all(), &current.temp_unit))
        .prompt()?;
    let wind = Select::new("Wind speed:", WindUnit::all().to_vec())
        .with_starting_cursor(index_of(WindUnit::all(), &current.wind_unit))
        .prompt()?;
    let distance = Select::new("Distance:", DistanceUnit::all().to_vec())
        .with_starting_cursor(index_of(DistanceUnit::all(), &current.distance_unit))
        .prompt()?;

    Ok(Settings {
        temp_unit: temp,
        wind_unit: wind,
        distance_unit: distance,
    })
}

fn prompt_theme_mode(current: ThemeMode) -> Result<ThemeMode> {
    Ok(Select::new("Theme mode:", ThemeMode::all().to_vec())
        .with_starting_cursor(index_of(ThemeMode::all(), &current))
        .prompt()?)
}

fn prompt_theme_color(current: Theme) -> Result<Theme> {
    let color = Select::new("Color:", ThemeColor::all().to_vec())
        .with_starting_cursor(index_of(ThemeColor::all(), &current.color))
        .prompt()?;

    Ok(Theme::new(current.mode, color))
}

/// A failed lookup ends `show` with an error so the exit status reflects it.
fn search_outcome(state: &AppState) -> Result<()> {
    match &state.error {
        Some(message) => Err(anyhow::anyhow!("{message}")),
        None => Ok(()),
    }
}

fn index_of<T: PartialEq>(all: &[T], item: &T) -> usize {
    all.iter().position(|x| x == item).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_args_override_only_given_units() {
        let args = UnitArgs {
            temp: None,
            wind: Some("mph".into()),
            distance: None,
        };
        let base = Settings::default().with_temp_unit(TempUnit::Fahrenheit);

        let settings = args.apply_to(base).unwrap();

        assert_eq!(settings.temp_unit, TempUnit::Fahrenheit);
        assert_eq!(settings.wind_unit, WindUnit::Mph);
        assert_eq!(settings.distance_unit, DistanceUnit::Km);
    }

    #[test]
    fn unit_args_reject_unknown_unit() {
        let args = UnitArgs {
            temp: Some("kelvin".into()),
            ..UnitArgs::default()
        };
        assert!(args.apply_to(Settings::default()).is_err());
    }

    #[test]
    fn failed_search_is_an_error() {
        let mut state = AppState::default();
        assert!(search_outcome(&state).is_ok());

        state.error = Some("city not found".to_string());
        let err = search_outcome(&state).unwrap_err();
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn parses_show_with_units() {
        let cli = Cli::try_parse_from(["weather-dashboard", "show", "Manila", "--temp", "fahrenheit"])
            .unwrap();
        match cli.command {
            Command::Show { city, units } => {
                assert_eq!(city, "Manila");
                assert_eq!(units.temp.as_deref(), Some("fahrenheit"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
