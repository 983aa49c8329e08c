//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when fetching a resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The body was not what we expected.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}
