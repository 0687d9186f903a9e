use crate::{
    error::FetchError,
    model::{ForecastSeries, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// The one network seam the screens depend on. Screens hold a
/// `Box<dyn WeatherFetch>` so tests can substitute a canned or failing
/// implementation without touching the network.
#[async_trait]
pub trait WeatherFetch: Send + Sync + Debug {
    /// Current conditions for a city query, one request.
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;

    /// Short forecast for a city query, truncated to the first
    /// [`ForecastSeries::LIMIT`] entries in response order.
    async fn fetch_forecast(&self, city: &str) -> Result<ForecastSeries, FetchError>;
}
