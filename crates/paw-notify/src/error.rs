//! Push notification error types.

use thiserror::Error;

/// Error from the token registration backend.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct SinkError(pub String);

/// Errors in the push registration lifecycle.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The user denied the notification permission prompt.
    #[error("Notification permission denied")]
    PermissionDenied,

    /// No device token is available to register.
    #[error("No device token available")]
    MissingToken,

    /// The registration backend rejected the token.
    #[error("Token registration failed: {0}")]
    Sink(String),

    /// Local token persistence failed.
    #[error("Token storage failed: {0}")]
    Storage(#[from] paw_cache::CacheError),
}

impl From<SinkError> for NotifyError {
    fn from(e: SinkError) -> Self {
        NotifyError::Sink(e.0)
    }
}
