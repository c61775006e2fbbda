use crate::{
    Config,
    error::FetchError,
    model::{Coord, CurrentConditions, Forecast},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Upstream source of current conditions and daily forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a free-text city query.
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, FetchError>;

    /// Multi-day forecast for a coordinate pair.
    async fn forecast(&self, coord: Coord) -> Result<Forecast, FetchError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, FetchError> {
        (**self).current_weather(query).await
    }

    async fn forecast(&self, coord: Coord) -> Result<Forecast, FetchError> {
        (**self).forecast(coord).await
    }
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key()?;

    let provider = match config.base_url.as_deref() {
        Some(base) => OpenWeatherProvider::with_base_url(api_key, base),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_stored_base_url() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        cfg.base_url = Some("http://localhost:9".to_string());

        let provider = provider_from_config(&cfg).expect("key is stored");
        assert!(format!("{provider:?}").contains("http://localhost:9/"));
    }

    #[test]
    fn provider_from_config_works_when_key_stored() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
