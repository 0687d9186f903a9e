//! Domain models, shaped to (de)serialize the OpenWeather wire format
//! directly. A snapshot is immutable once parsed: a new fetch produces a
//! wholly new value, never a mutation of an old one.

use serde::{Deserialize, Serialize};

/// One point-in-time weather observation, as returned by the
/// current-conditions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location name, e.g. "Ho Chi Minh".
    pub name: String,
    pub coord: Coordinates,
    /// Observation timestamp, Unix epoch seconds.
    pub dt: i64,
    /// One or more condition descriptors; the first is the primary one.
    pub weather: Vec<ConditionDescriptor>,
    pub main: MainMeasurements,
    pub wind: Wind,
    pub sys: SunInfo,
}

impl WeatherSnapshot {
    /// Primary condition category keyword ("Clear", "Rain", ...), or the
    /// empty string when the API returned no descriptors. The empty string
    /// degrades to the default background downstream.
    pub fn primary_condition(&self) -> &str {
        self.weather.first().map(|w| w.main.as_str()).unwrap_or("")
    }

    /// "Name, CC" label the screens display.
    pub fn location_label(&self) -> String {
        if self.sys.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.sys.country)
        }
    }
}

/// Coarse classification plus human description of one weather condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDescriptor {
    /// Category keyword matched against the background asset set.
    pub main: String,
    pub description: String,
    /// OpenWeather icon identifier, e.g. "10d".
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// The `main` measurement block. Temperatures are Kelvin on the wire;
/// conversion happens at display time, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMeasurements {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    /// Surface pressure, hPa.
    pub pressure: u32,
    /// Sea-level pressure, hPa. Not reported by every station.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
    /// Direction, meteorological degrees.
    #[serde(default)]
    pub deg: u16,
}

/// The `sys` block: country code plus sunrise/sunset epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunInfo {
    #[serde(default)]
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Ordered short sequence of future observations for one location.
/// Insertion order is the chronological order returned by the API and is
/// preserved end to end for the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub name: String,
    pub country: String,
    pub entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    /// The carousel shows at most this many entries; the client keeps the
    /// FIRST entries of the response's `list` and drops the rest.
    pub const LIMIT: usize = 5;

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One forecast slot. Unlike the current-conditions payload there is no
/// per-entry location or sun block; those live on the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub weather: Vec<ConditionDescriptor>,
    pub main: MainMeasurements,
    pub wind: Wind,
}

impl ForecastEntry {
    pub fn primary_condition(&self) -> &str {
        self.weather.first().map(|w| w.main.as_str()).unwrap_or("")
    }
}
