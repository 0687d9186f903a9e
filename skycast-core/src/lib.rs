//! Core library for the `skycast` weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and the fetch abstraction the screens consume
//! - Shared domain models (current snapshot, forecast series)
//! - The condition-to-background mapper and unit/time formatters
//! - Screen-state reducers and the navigation payload codec
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod screen;

pub use condition::AssetKey;
pub use config::Config;
pub use error::{FetchError, NavError};
pub use fetch::{OpenWeatherClient, WeatherFetch};
pub use model::{ConditionDescriptor, ForecastSeries, WeatherSnapshot};
pub use screen::{FetchTicket, ForecastController, ScreenController, ScreenState};
