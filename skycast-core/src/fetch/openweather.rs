use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    error::FetchError,
    model::{ForecastEntry, ForecastSeries, WeatherSnapshot},
};

use super::WeatherFetch;

/// HTTP client for the OpenWeather REST API.
///
/// One GET per call, no retry, no timeout beyond reqwest's defaults. The
/// API key is held opaque and never appears in logs or error messages.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base: base.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self::new(config.api_base(), api_key))
    }

    /// Forecast lives one path segment under the current-conditions
    /// endpoint, mirroring how the app's two fetch paths were wired.
    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base)
    }

    async fn get_body(&self, url: &str, city: &str) -> Result<String, FetchError> {
        let res = self
            .http
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherFetch for OpenWeatherClient {
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!("fetching current conditions for {city:?}");
        let body = self.get_body(&self.base, city).await?;
        parse_current(&body)
    }

    async fn fetch_forecast(&self, city: &str) -> Result<ForecastSeries, FetchError> {
        debug!("fetching forecast for {city:?}");
        let body = self.get_body(&self.forecast_url(), city).await?;
        parse_forecast(&body)
    }
}

fn parse_current(body: &str) -> Result<WeatherSnapshot, FetchError> {
    Ok(serde_json::from_str(body)?)
}

fn parse_forecast(body: &str) -> Result<ForecastSeries, FetchError> {
    let parsed: OwForecastResponse = serde_json::from_str(body)?;

    let mut entries = parsed.list;
    entries.truncate(ForecastSeries::LIMIT);

    Ok(ForecastSeries {
        name: parsed.city.name,
        country: parsed.city.country,
        entries,
    })
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<ForecastEntry>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i <= MAX)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
