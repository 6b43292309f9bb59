//! State layer error types.

use paw_commerce::CommerceError;
use paw_cache::CacheError;
use thiserror::Error;

/// Error from a backend call made by the state layer.
///
/// The service layer maps its transport errors into this; the state layer
/// only needs the message for diagnostics.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct BackendError(pub String);

/// Errors surfaced by the state managers.
#[derive(Error, Debug)]
pub enum StateError {
    /// Operation requires an authenticated user.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The control for this line item already has a request in flight.
    #[error("Control busy: {0}")]
    ControlBusy(String),

    /// Domain error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Local storage error.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
