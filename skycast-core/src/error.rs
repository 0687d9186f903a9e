use thiserror::Error;

/// Everything that can go wrong between issuing a request and having a
/// usable snapshot. All variants are recoverable: the screens reduce them
/// into an empty/fallback state instead of propagating.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: DNS, connect, TLS, or a dropped body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with 2xx.
    #[error("request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        /// Truncated body excerpt, for diagnostics only.
        body: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures at the navigation boundary, where a screen receives its
/// predecessor's already-fetched snapshot as a serialized parameter.
#[derive(Debug, Error)]
pub enum NavError {
    /// The screen was entered directly, without a payload.
    #[error("no weather payload was provided")]
    Missing,

    /// A payload was provided but does not decode to a snapshot.
    #[error("weather payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
