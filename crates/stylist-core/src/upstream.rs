//! Classification of failed upstream HTTP calls.

use crate::error::Error;

/// Coarse failure classes shared by the model and search clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorCode {
    /// Invalid or missing API key.
    AuthenticationError,
    /// Rate limit or quota exceeded.
    RateLimitExceeded,
    /// Deployment or index does not exist.
    ResourceNotFound,
    /// Request rejected by the hosted content filter.
    ContentFiltered,
    /// Request rejected as invalid (e.g. unreadable image).
    BadRequest,
    /// Server-side failure.
    ServerError,
    /// Anything else.
    Unknown,
}

impl UpstreamErrorCode {
    /// Determine the class from HTTP status and the error code in the body.
    pub fn from_response(status: u16, error_code: &str) -> Self {
        match (status, error_code) {
            (401, _) | (403, _) => Self::AuthenticationError,
            (429, _) => Self::RateLimitExceeded,
            (404, _) | (_, "DeploymentNotFound") => Self::ResourceNotFound,
            (400, _) if error_code == "content_filter" => Self::ContentFiltered,
            (400, _) => Self::BadRequest,
            (500..=599, _) => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationError => "authentication_error",
            Self::RateLimitExceeded => "rate_limit_exceeded",
            Self::ResourceNotFound => "resource_not_found",
            Self::ContentFiltered => "content_filtered",
            Self::BadRequest => "bad_request",
            Self::ServerError => "server_error",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for UpstreamErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the [`Error::UpstreamCallFailed`] for a non-success response.
pub fn upstream_error(service: &str, status: u16, error_code: &str, message: &str) -> Error {
    let code = UpstreamErrorCode::from_response(status, error_code);
    Error::UpstreamCallFailed(format!(
        "{} returned {} ({}): {}",
        service, status, code, message
    ))
}
