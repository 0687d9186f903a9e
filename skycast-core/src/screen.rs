//! Screen-side state handling.
//!
//! Each screen owns one controller: a small reducer over
//! `{Idle, Loading, Loaded, Failed}` plus the derived background asset.
//! Requests carry a monotonically increasing sequence number; a response
//! whose ticket is not the latest issued is discarded, so a slow fetch can
//! never overwrite the result of a newer one.

use crate::{
    condition::AssetKey,
    error::FetchError,
    fetch::WeatherFetch,
    model::{ForecastEntry, ForecastSeries, WeatherSnapshot},
};

/// Lifecycle of one screen's fetched data.
#[derive(Debug)]
pub enum ScreenState<T> {
    /// Nothing fetched yet (or the screen was reset).
    Idle,
    /// A request is in flight.
    Loading,
    Loaded(T),
    /// The last request failed; the screen renders its empty state.
    Failed(FetchError),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ScreenState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ScreenState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Proof of a specific `begin_fetch` call. `resolve` only applies a result
/// whose ticket matches the latest issued sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// Controller for the current-conditions screens (home and single-details).
#[derive(Debug)]
pub struct ScreenController {
    query: String,
    state: ScreenState<WeatherSnapshot>,
    background: AssetKey,
    seq: u64,
}

impl ScreenController {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            query: initial_query.into(),
            state: ScreenState::Idle,
            background: AssetKey::default(),
            seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ScreenState<WeatherSnapshot> {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.state.loaded()
    }

    pub fn background(&self) -> AssetKey {
        self.background
    }

    /// Record a new submission and enter `Loading`. Any ticket issued
    /// earlier is superseded from this point on.
    pub fn begin_fetch(&mut self, query: impl Into<String>) -> FetchTicket {
        self.query = query.into();
        self.seq += 1;
        self.state = ScreenState::Loading;
        FetchTicket { seq: self.seq }
    }

    /// Apply a fetch outcome. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> bool {
        if ticket.seq != self.seq {
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.background = AssetKey::from_condition(snapshot.primary_condition());
                self.state = ScreenState::Loaded(snapshot);
            }
            Err(err) => {
                self.background = AssetKey::default();
                self.state = ScreenState::Failed(err);
            }
        }
        true
    }

    /// One full submit-and-resolve cycle against a fetcher. The CLI's
    /// one-shot commands use this; the ticket dance still applies, so
    /// interleaved manual `begin_fetch` calls win over an in-flight one.
    pub async fn fetch(&mut self, fetcher: &dyn WeatherFetch, city: &str) -> bool {
        let ticket = self.begin_fetch(city.to_owned());
        let result = fetcher.fetch_current(city).await;
        self.resolve(ticket, result)
    }

    /// Serialized snapshot for the navigation handoff, when one is loaded.
    /// The receiving screen gets a copy, never a shared reference.
    pub fn nav_payload(&self) -> Option<String> {
        self.snapshot().and_then(|snap| nav::encode(snap).ok())
    }
}

/// Controller for the forecast screen: the same reducer over a series,
/// plus a carousel cursor. Every cursor move re-derives the background
/// from that entry's condition.
#[derive(Debug)]
pub struct ForecastController {
    query: String,
    state: ScreenState<ForecastSeries>,
    background: AssetKey,
    cursor: usize,
    seq: u64,
}

impl ForecastController {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            query: initial_query.into(),
            state: ScreenState::Idle,
            background: AssetKey::default(),
            cursor: 0,
            seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ScreenState<ForecastSeries> {
        &self.state
    }

    pub fn series(&self) -> Option<&ForecastSeries> {
        self.state.loaded()
    }

    pub fn background(&self) -> AssetKey {
        self.background
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_entry(&self) -> Option<&ForecastEntry> {
        self.series().and_then(|s| s.entries.get(self.cursor))
    }

    pub fn begin_fetch(&mut self, query: impl Into<String>) -> FetchTicket {
        self.query = query.into();
        self.seq += 1;
        self.state = ScreenState::Loading;
        FetchTicket { seq: self.seq }
    }

    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<ForecastSeries, FetchError>,
    ) -> bool {
        if ticket.seq != self.seq {
            return false;
        }

        match result {
            Ok(series) => {
                self.cursor = 0;
                self.background = series
                    .entries
                    .first()
                    .map(|e| AssetKey::from_condition(e.primary_condition()))
                    .unwrap_or_default();
                self.state = ScreenState::Loaded(series);
            }
            Err(err) => {
                self.cursor = 0;
                self.background = AssetKey::default();
                self.state = ScreenState::Failed(err);
            }
        }
        true
    }

    pub async fn fetch(&mut self, fetcher: &dyn WeatherFetch, city: &str) -> bool {
        let ticket = self.begin_fetch(city.to_owned());
        let result = fetcher.fetch_forecast(city).await;
        self.resolve(ticket, result)
    }

    /// Swipe forward one entry; clamps at the last one.
    pub fn swipe_next(&mut self) {
        let len = self.series().map(ForecastSeries::len).unwrap_or(0);
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
            self.rederive_background();
        }
    }

    /// Swipe back one entry; clamps at the first one.
    pub fn swipe_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.rederive_background();
        }
    }

    fn rederive_background(&mut self) {
        self.background = self
            .current_entry()
            .map(|e| AssetKey::from_condition(e.primary_condition()))
            .unwrap_or_default();
    }
}

/// Navigation payload codec. A screen forwards its already-fetched
/// snapshot to the next screen as a JSON string; the receiver decodes it
/// back, or renders its "no data" state when the parameter is absent.
pub mod nav {
    use crate::{error::NavError, model::WeatherSnapshot};

    pub fn encode(snapshot: &WeatherSnapshot) -> Result<String, serde_json::Error> {
        serde_json::to_string(snapshot)
    }

    pub fn decode(payload: Option<&str>) -> Result<WeatherSnapshot, NavError> {
        let raw = payload.ok_or(NavError::Missing)?;
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::model::{ConditionDescriptor, Coordinates, MainMeasurements, SunInfo, Wind};
    use async_trait::async_trait;
    use reqwest::StatusCode;

    fn descriptor(main: &str) -> ConditionDescriptor {
        ConditionDescriptor {
            main: main.to_string(),
            description: format!("{} conditions", main.to_lowercase()),
            icon: "10d".to_string(),
        }
    }

    fn snapshot(name: &str, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            name: name.to_string(),
            coord: Coordinates { lat: 48.85, lon: 2.35 },
            dt: 1_727_692_514,
            weather: vec![descriptor(condition)],
            main: MainMeasurements {
                temp: 290.0,
                temp_min: 288.0,
                temp_max: 292.0,
                humidity: 70,
                pressure: 1011,
                sea_level: None,
            },
            wind: Wind { speed: 4.2, deg: 180 },
            sys: SunInfo {
                country: "FR".to_string(),
                sunrise: 1_727_651_245,
                sunset: 1_727_694_603,
            },
        }
    }

    fn series(conditions: &[&str]) -> ForecastSeries {
        let entries = conditions
            .iter()
            .enumerate()
            .map(|(i, c)| ForecastEntry {
                dt: 1_727_000_000 + i as i64 * 10_800,
                weather: vec![descriptor(c)],
                main: MainMeasurements {
                    temp: 289.0,
                    temp_min: 288.0,
                    temp_max: 290.0,
                    humidity: 65,
                    pressure: 1010,
                    sea_level: None,
                },
                wind: Wind { speed: 3.0, deg: 90 },
            })
            .collect();

        ForecastSeries {
            name: "Paris".to_string(),
            country: "FR".to_string(),
            entries,
        }
    }

    fn status_error() -> FetchError {
        FetchError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream unavailable".to_string(),
        }
    }

    /// Fetcher that always fails, standing in for an unreachable network.
    #[derive(Debug)]
    struct DownFetch;

    #[async_trait]
    impl WeatherFetch for DownFetch {
        async fn fetch_current(&self, _city: &str) -> Result<WeatherSnapshot, FetchError> {
            Err(status_error())
        }

        async fn fetch_forecast(&self, _city: &str) -> Result<ForecastSeries, FetchError> {
            Err(status_error())
        }
    }

    #[test]
    fn loaded_snapshot_derives_background() {
        let mut ctl = ScreenController::new("Paris");
        let ticket = ctl.begin_fetch("Paris");
        assert!(ctl.state().is_loading());

        assert!(ctl.resolve(ticket, Ok(snapshot("Paris", "Rain"))));
        assert_eq!(ctl.background(), AssetKey::Rain);
        assert_eq!(ctl.snapshot().unwrap().name, "Paris");
    }

    #[test]
    fn unknown_condition_degrades_to_clouds() {
        let mut ctl = ScreenController::new("Unknownsville");
        let ticket = ctl.begin_fetch("Unknownsville");

        assert!(ctl.resolve(ticket, Ok(snapshot("Unknownsville", "Foo"))));
        assert_eq!(ctl.background(), AssetKey::Clouds);
    }

    #[test]
    fn failed_fetch_leaves_empty_state_and_default_background() {
        let mut ctl = ScreenController::new("Paris");
        let t1 = ctl.begin_fetch("Paris");
        ctl.resolve(t1, Ok(snapshot("Paris", "Clear")));
        assert_eq!(ctl.background(), AssetKey::Clear);

        let t2 = ctl.begin_fetch("Paris");
        assert!(ctl.resolve(t2, Err(status_error())));

        assert!(ctl.snapshot().is_none());
        assert!(ctl.state().error().is_some());
        assert_eq!(ctl.background(), AssetKey::default());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctl = ScreenController::new("Paris");

        let stale = ctl.begin_fetch("Paris");
        let fresh = ctl.begin_fetch("London");

        // The older request finishes late; nothing changes.
        assert!(!ctl.resolve(stale, Ok(snapshot("Paris", "Rain"))));
        assert!(ctl.state().is_loading());
        assert_eq!(ctl.query(), "London");

        assert!(ctl.resolve(fresh, Ok(snapshot("London", "Snow"))));
        assert_eq!(ctl.snapshot().unwrap().name, "London");
        assert_eq!(ctl.background(), AssetKey::Snow);

        // And a duplicate of the already-applied ticket can't re-apply
        // an older payload either.
        assert!(!ctl.resolve(stale, Ok(snapshot("Paris", "Rain"))));
        assert_eq!(ctl.snapshot().unwrap().name, "London");
    }

    #[tokio::test]
    async fn transport_failure_never_escapes_the_controller() {
        let mut ctl = ScreenController::new("Paris");
        assert!(ctl.fetch(&DownFetch, "Paris").await);

        assert!(ctl.snapshot().is_none());
        assert!(ctl.state().error().is_some());
        assert_eq!(ctl.background(), AssetKey::default());

        let mut fc = ForecastController::new("Paris");
        assert!(fc.fetch(&DownFetch, "Paris").await);
        assert!(fc.series().is_none());
        assert_eq!(fc.background(), AssetKey::default());
    }

    #[test]
    fn forecast_cursor_swipes_and_rederives_background() {
        let mut ctl = ForecastController::new("Paris");
        let ticket = ctl.begin_fetch("Paris");
        ctl.resolve(ticket, Ok(series(&["Rain", "Clear", "Snow"])));

        assert_eq!(ctl.cursor(), 0);
        assert_eq!(ctl.background(), AssetKey::Rain);

        ctl.swipe_next();
        assert_eq!(ctl.cursor(), 1);
        assert_eq!(ctl.background(), AssetKey::Clear);

        ctl.swipe_next();
        ctl.swipe_next(); // clamped at the last entry
        assert_eq!(ctl.cursor(), 2);
        assert_eq!(ctl.background(), AssetKey::Snow);

        ctl.swipe_prev();
        ctl.swipe_prev();
        ctl.swipe_prev(); // clamped at the first entry
        assert_eq!(ctl.cursor(), 0);
        assert_eq!(ctl.background(), AssetKey::Rain);
    }

    #[test]
    fn empty_series_keeps_default_background() {
        let mut ctl = ForecastController::new("Paris");
        let ticket = ctl.begin_fetch("Paris");
        ctl.resolve(ticket, Ok(series(&[])));

        assert!(ctl.current_entry().is_none());
        assert_eq!(ctl.background(), AssetKey::default());

        ctl.swipe_next(); // no entries, nothing to move to
        assert_eq!(ctl.cursor(), 0);
    }

    #[test]
    fn nav_roundtrip_is_deep_equal() {
        let original = snapshot("Paris", "Rain");
        let payload = nav::encode(&original).unwrap();
        let decoded = nav::decode(Some(&payload)).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn nav_missing_and_malformed_payloads() {
        assert!(matches!(nav::decode(None), Err(NavError::Missing)));
        assert!(matches!(
            nav::decode(Some("not json")),
            Err(NavError::Malformed(_))
        ));
        assert!(matches!(
            nav::decode(Some(r#"{"name": "half a snapshot"}"#)),
            Err(NavError::Malformed(_))
        ));
    }

    #[test]
    fn nav_payload_only_exists_once_loaded() {
        let mut ctl = ScreenController::new("Paris");
        assert!(ctl.nav_payload().is_none());

        let ticket = ctl.begin_fetch("Paris");
        ctl.resolve(ticket, Ok(snapshot("Paris", "Rain")));
        let payload = ctl.nav_payload().expect("loaded screen must hand off data");

        let decoded = nav::decode(Some(&payload)).unwrap();
        assert_eq!(&decoded, ctl.snapshot().unwrap());
    }
}
