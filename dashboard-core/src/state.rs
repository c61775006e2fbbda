//! Application state for the dashboard.
//!
//! All mutation goes through [`AppState::apply`]. Fetches are described as
//! [`Effect`]s for the caller to run; their results come back as actions.
//! Current-conditions fetches carry a [`RequestId`] and only the latest one is
//! accepted. Forecasts are tagged with the city they were requested for and
//! stored on that city's record.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::{
    condition::is_wet,
    model::{CityId, Coord, CurrentConditions, Forecast},
    theme::{Theme, ThemeMode},
    units::Settings,
};

/// Searched cities kept in history.
pub const MAX_CITIES: usize = 8;

/// Centre used by the map when no city is selected (Manila).
pub const DEFAULT_MAP_CENTER: Coord = Coord {
    lat: 14.5995,
    lon: 120.9842,
};

pub const LOGO_DEFAULT: &str = "🌍";
pub const LOGO_WET: &str = "☔";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Weather,
    Cities,
    Map,
    Theme,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Weather => "Weather",
            Tab::Cities => "Cities",
            Tab::Map => "Map",
            Tab::Theme => "Theme",
        }
    }
}

/// One entry of the search history with its own forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub id: CityId,
    pub name: String,
    pub coord: Coord,
    pub temp_c: f64,
    pub condition_main: Option<String>,
    pub condition_description: Option<String>,
    pub searched_at: DateTime<Local>,
    pub current: CurrentConditions,
    pub forecast: Option<Forecast>,
}

impl CityRecord {
    pub fn new(current: CurrentConditions, searched_at: DateTime<Local>) -> Self {
        let condition = current.condition().cloned();
        Self {
            id: current.id,
            name: current.name.clone(),
            coord: current.coord,
            temp_c: current.main.temp,
            condition_main: condition.as_ref().map(|c| c.main.clone()),
            condition_description: condition.map(|c| c.description),
            searched_at,
            current,
            forecast: None,
        }
    }

    /// `"Name, CC"`, or just the name when the country is unknown.
    pub fn title(&self) -> String {
        match self.current.country() {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    SearchSubmitted {
        query: String,
    },
    CurrentReceived {
        request: RequestId,
        weather: CurrentConditions,
        received_at: DateTime<Local>,
    },
    SearchFailed {
        request: RequestId,
        message: String,
    },
    ForecastReceived {
        city_id: CityId,
        forecast: Forecast,
    },
    ForecastFailed {
        city_id: CityId,
    },
    SettingsChanged(Settings),
    ThemeModeChanged(ThemeMode),
    /// Pick a full theme and return to the weather tab.
    ThemePicked(Theme),
    TabSelected(Tab),
    CitySelected(CityId),
}

/// Work the caller must perform and report back.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchCurrent { request: RequestId, query: String },
    FetchForecast { city_id: CityId, coord: Coord },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub settings: Settings,
    pub theme: Theme,
    pub active_tab: Tab,
    pub loading: bool,
    pub error: Option<String>,
    cities: Vec<CityRecord>,
    selected_city: Option<CityId>,
    current_city: Option<CityId>,
    last_request: u64,
}

impl AppState {
    pub fn new(settings: Settings, theme: Theme) -> Self {
        Self {
            settings,
            theme,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SearchSubmitted { query } => self.submit_search(&query),
            Action::CurrentReceived {
                request,
                weather,
                received_at,
            } => self.receive_current(request, weather, received_at),
            Action::SearchFailed { request, message } => {
                if self.is_stale(request) {
                    return None;
                }
                self.loading = false;
                self.current_city = None;
                self.error = Some(message);
                None
            }
            Action::ForecastReceived { city_id, forecast } => {
                match self.city_mut(city_id) {
                    Some(city) => city.forecast = Some(forecast),
                    None => debug!(city_id, "dropping forecast for city no longer in history"),
                }
                None
            }
            Action::ForecastFailed { city_id } => {
                warn!(city_id, "forecast unavailable");
                if let Some(city) = self.city_mut(city_id) {
                    city.forecast = None;
                }
                None
            }
            Action::SettingsChanged(settings) => {
                self.settings = settings;
                None
            }
            Action::ThemeModeChanged(mode) => {
                self.theme.mode = mode;
                None
            }
            Action::ThemePicked(theme) => {
                self.theme = theme;
                self.active_tab = Tab::Weather;
                None
            }
            Action::TabSelected(tab) => {
                self.active_tab = tab;
                None
            }
            Action::CitySelected(city_id) => {
                if self.city(city_id).is_some() {
                    self.selected_city = Some(city_id);
                } else {
                    debug!(city_id, "ignoring selection of unknown city");
                }
                None
            }
        }
    }

    fn submit_search(&mut self, query: &str) -> Option<Effect> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.last_request += 1;
        let request = RequestId(self.last_request);
        self.loading = true;
        self.error = None;
        debug!(?request, query, "search submitted");

        Some(Effect::FetchCurrent {
            request,
            query: query.to_string(),
        })
    }

    fn receive_current(
        &mut self,
        request: RequestId,
        weather: CurrentConditions,
        received_at: DateTime<Local>,
    ) -> Option<Effect> {
        if self.is_stale(request) {
            return None;
        }

        let record = CityRecord::new(weather, received_at);
        let city_id = record.id;
        let coord = record.coord;

        self.loading = false;
        self.cities.retain(|c| c.id != city_id);
        self.cities.insert(0, record);
        self.cities.truncate(MAX_CITIES);
        self.selected_city = Some(city_id);
        self.current_city = Some(city_id);

        Some(Effect::FetchForecast { city_id, coord })
    }

    fn is_stale(&self, request: RequestId) -> bool {
        let stale = request.0 != self.last_request;
        if stale {
            warn!(?request, latest = self.last_request, "discarding stale response");
        }
        stale
    }

    fn city_mut(&mut self, city_id: CityId) -> Option<&mut CityRecord> {
        self.cities.iter_mut().find(|c| c.id == city_id)
    }

    pub fn city(&self, city_id: CityId) -> Option<&CityRecord> {
        self.cities.iter().find(|c| c.id == city_id)
    }

    /// History, most recent search first.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    /// City at a position in the history list, as shown by [`AppState::cities`].
    pub fn city_at(&self, index: usize) -> Option<&CityRecord> {
        self.cities.get(index)
    }

    /// City shown on the weather tab: the latest successful search.
    pub fn current_city(&self) -> Option<&CityRecord> {
        self.current_city.and_then(|id| self.city(id))
    }

    /// Selected city, falling back to the most recent search.
    pub fn selected_city(&self) -> Option<&CityRecord> {
        self.selected_city
            .and_then(|id| self.city(id))
            .or_else(|| self.cities.first())
    }

    pub fn logo(&self) -> &'static str {
        match self
            .current_city()
            .and_then(|c| c.condition_main.as_deref())
        {
            Some(main) if is_wet(main) => LOGO_WET,
            _ => LOGO_DEFAULT,
        }
    }

    pub fn map_center(&self) -> Coord {
        self.selected_city()
            .map(|c| c.coord)
            .unwrap_or(DEFAULT_MAP_CENTER)
    }
}
