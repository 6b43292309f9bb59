//! HTTP and service error types.

use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::JsonError(e.to_string())
    }
}

impl From<ApiError> for paw_state::BackendError {
    fn from(e: ApiError) -> Self {
        paw_state::BackendError(e.to_string())
    }
}

impl From<ApiError> for paw_notify::SinkError {
    fn from(e: ApiError) -> Self {
        paw_notify::SinkError(e.to_string())
    }
}
