//! Error types for the stylist service.

use thiserror::Error;

/// Result type alias using the stylist Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stylist operations.
///
/// Every failure aborts the request it occurred in. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration value is absent at startup
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    /// Network, authentication, timeout or non-success status on a remote call
    #[error("Upstream call failed: {0}")]
    UpstreamCallFailed(String),

    /// Expected field absent from a model or search response
    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// The search index returned zero hits for the query
    #[error("No catalog match found for query: {0:?}")]
    NoMatchFound(String),

    /// Missing or empty image in the incoming request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::MalformedUpstreamResponse(e.to_string())
        } else {
            Error::UpstreamCallFailed(e.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedUpstreamResponse(e.to_string())
    }
}
