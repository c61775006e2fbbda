use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    error::{FetchError, GENERIC_API_MESSAGE},
    model::{Coord, CurrentConditions, Forecast},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Error body OpenWeather sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

async fn read_json<T: DeserializeOwned>(res: Response, what: &str) -> Result<T, FetchError> {
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        warn!(%status, body = %truncate_body(&body), "OpenWeather {what} request failed");

        let message = serde_json::from_str::<OwErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_API_MESSAGE.to_string());

        return Err(FetchError::Api { status, message });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), level = "info")]
    async fn current_weather(&self, query: &str) -> Result<CurrentConditions, FetchError> {
        let res = self
            .http
            .get(self.endpoint("weather"))
            .query(&[
                ("q", query),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let parsed: CurrentConditions = read_json(res, "current weather").await?;
        debug!(city_id = parsed.id, name = %parsed.name, "current weather received");
        Ok(parsed)
    }

    #[instrument(skip(self), level = "info")]
    async fn forecast(&self, coord: Coord) -> Result<Forecast, FetchError> {
        let lat = coord.lat.to_string();
        let lon = coord.lon.to_string();

        let res = self
            .http
            .get(self.endpoint("onecall"))
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("exclude", "minutely,hourly,alerts"),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let parsed: Forecast = read_json(res, "forecast").await?;
        debug!(days = parsed.daily.len(), "forecast received");
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
