mod client;
pub mod types;

pub use crate::{
    client::{
        resolve_profile_path,
        BoxError,
        Client,
        HttpClient,
        RawResponse,
        DEFAULT_BASE_URL,
    },
    types::{
        InvalidPlatform,
        LifetimeStat,
        Match,
        Metric,
        Platform,
        Playlist,
        Stats,
        StatsGroup,
        StatsResponse,
    },
};
pub use reqwest::StatusCode;

/// Result type
pub type TrackerResult<T> = Result<T, Error>;

/// Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The platform was not one of `pc`, `xbl`, or `psn`
    #[error(transparent)]
    InvalidPlatform(#[from] InvalidPlatform),

    /// The request could not be built
    #[error("failed to build request: {0}")]
    RequestConstruction(#[from] RequestError),

    /// The transport failed to perform the request
    #[error("failed to send request: {0}")]
    Transport(#[source] BoxError),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// Invalid HTTP Status
    #[error("invalid http status {0}")]
    InvalidStatus(reqwest::StatusCode),

    /// Json Error
    #[error("failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error that occured while building a request
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Url Parse Error
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The api key cannot be used as a header value
    #[error("invalid api key: {0}")]
    ApiKey(#[from] reqwest::header::InvalidHeaderValue),
}
