use chrono::Local;
use tracing::{info, warn};

use crate::{
    provider::WeatherProvider,
    state::{Action, AppState, Effect},
};

/// Runs searches against a provider and keeps the resulting state.
#[derive(Debug)]
pub struct Dashboard<P> {
    provider: P,
    state: AppState,
}

impl<P: WeatherProvider> Dashboard<P> {
    pub fn new(provider: P, state: AppState) -> Self {
        Self { provider, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Feed an action to the state and run whatever fetches it asks for.
    pub async fn dispatch(&mut self, action: Action) {
        let mut next = self.state.apply(action);
        while let Some(effect) = next {
            let result = self.run_effect(effect).await;
            next = self.state.apply(result);
        }
    }

    /// Look up a city; the forecast is fetched only once the city resolves.
    pub async fn search(&mut self, query: &str) {
        self.dispatch(Action::SearchSubmitted {
            query: query.to_string(),
        })
        .await;
    }

    async fn run_effect(&self, effect: Effect) -> Action {
        match effect {
            Effect::FetchCurrent { request, query } => {
                match self.provider.current_weather(&query).await {
                    Ok(weather) => {
                        info!(city = %weather.name, "weather loaded");
                        Action::CurrentReceived {
                            request,
                            weather,
                            received_at: Local::now(),
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, query, "weather lookup failed");
                        Action::SearchFailed {
                            request,
                            message: err.user_message(),
                        }
                    }
                }
            }
            Effect::FetchForecast { city_id, coord } => {
                match self.provider.forecast(coord).await {
                    Ok(forecast) => Action::ForecastReceived { city_id, forecast },
                    Err(err) => {
                        warn!(error = %err, city_id, "forecast lookup failed");
                        Action::ForecastFailed { city_id }
                    }
                }
            }
        }
    }
}
