//! Push notification support for PawMart.
//!
//! Device token lifecycle only: permission state, token registration with
//! the backend through an injected [`TokenSink`], and local token caching.
//! Message delivery and display are the platform's job.

mod client;
mod error;

pub use client::{
    DeviceToken, PermissionState, PushClient, PushConfig, RegistrationState, TokenSink,
};
pub use error::{NotifyError, SinkError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        DeviceToken, NotifyError, PermissionState, PushClient, PushConfig, RegistrationState,
        SinkError, TokenSink,
    };
}
