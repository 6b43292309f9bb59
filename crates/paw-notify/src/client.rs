//! Push registration client.
//!
//! Owns the device token lifecycle: once the platform grants permission and
//! hands over a token, the token is registered with the backend and cached
//! locally so later sessions can skip re-registration. Unregistration is
//! part of logout and is tolerant of backend failure: the local token is
//! always dropped.

use crate::error::{NotifyError, SinkError};
use paw_cache::{keys, Store};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Push configuration, injected at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// The sender id the platform token is scoped to.
    pub sender_id: String,
}

impl PushConfig {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
        }
    }
}

/// An opaque device token issued by the push platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceToken(String);

impl DeviceToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The platform's notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Not yet asked.
    Default,
    Granted,
    Denied,
}

/// Where the client is in the registration lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationState {
    /// Nothing registered.
    Idle,
    /// The user refused; do not prompt again this session.
    PermissionDenied,
    /// A token is registered with the backend.
    Registered(DeviceToken),
}

/// Registers device tokens with the notification backend.
pub trait TokenSink {
    fn register_token(&self, token: &DeviceToken) -> Result<(), SinkError>;
    fn unregister_token(&self, token: &DeviceToken) -> Result<(), SinkError>;
}

/// Drives push registration against an injected sink.
pub struct PushClient<S: TokenSink> {
    config: PushConfig,
    sink: S,
    store: Store,
    state: RegistrationState,
}

impl<S: TokenSink> PushClient<S> {
    /// Create a client, restoring a previously cached token if present.
    pub fn new(config: PushConfig, sink: S, store: Store) -> Self {
        let state = match store.get::<DeviceToken>(keys::device_token_key()) {
            Ok(Some(token)) => RegistrationState::Registered(token),
            Ok(None) => RegistrationState::Idle,
            Err(e) => {
                warn!(error = %e, "cached device token unreadable; starting idle");
                RegistrationState::Idle
            }
        };
        Self {
            config,
            sink,
            store,
            state,
        }
    }

    pub fn config(&self) -> &PushConfig {
        &self.config
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Register a platform-issued token.
    ///
    /// Requires granted permission. Re-registering the currently registered
    /// token is a no-op; a different token replaces the registration.
    pub fn register(
        &mut self,
        permission: PermissionState,
        token: DeviceToken,
    ) -> Result<(), NotifyError> {
        match permission {
            PermissionState::Granted => {}
            PermissionState::Denied | PermissionState::Default => {
                self.state = RegistrationState::PermissionDenied;
                return Err(NotifyError::PermissionDenied);
            }
        }

        if self.state == RegistrationState::Registered(token.clone()) {
            return Ok(());
        }

        self.sink.register_token(&token)?;
        self.store.set(keys::device_token_key(), &token)?;
        self.state = RegistrationState::Registered(token);
        Ok(())
    }

    /// Unregister the current token, if any.
    ///
    /// Idempotent. The local token is dropped even when the backend call
    /// fails, so a logged-out session never reuses it.
    pub fn unregister(&mut self) -> Result<(), NotifyError> {
        let token = match &self.state {
            RegistrationState::Registered(token) => token.clone(),
            _ => return Ok(()),
        };

        if let Err(e) = self.sink.unregister_token(&token) {
            warn!(error = %e, "token unregistration failed; dropping local token");
        }
        self.store.delete(keys::device_token_key())?;
        self.state = RegistrationState::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockSink {
        registered: RefCell<Vec<String>>,
        unregistered: RefCell<Vec<String>>,
    }

    impl TokenSink for MockSink {
        fn register_token(&self, token: &DeviceToken) -> Result<(), SinkError> {
            self.registered.borrow_mut().push(token.to_string());
            Ok(())
        }

        fn unregister_token(&self, token: &DeviceToken) -> Result<(), SinkError> {
            self.unregistered.borrow_mut().push(token.to_string());
            Ok(())
        }
    }

    fn client() -> PushClient<MockSink> {
        PushClient::new(
            PushConfig::new("sender-1"),
            MockSink::default(),
            Store::open_default().unwrap(),
        )
    }

    #[test]
    fn test_register_requires_permission() {
        let mut c = client();
        let result = c.register(PermissionState::Denied, DeviceToken::new("tok"));
        assert!(matches!(result, Err(NotifyError::PermissionDenied)));
        assert_eq!(*c.state(), RegistrationState::PermissionDenied);
        assert!(c.sink().registered.borrow().is_empty());
    }

    #[test]
    fn test_register_stores_token() {
        let mut c = client();
        c.register(PermissionState::Granted, DeviceToken::new("tok-1"))
            .unwrap();

        assert_eq!(
            *c.state(),
            RegistrationState::Registered(DeviceToken::new("tok-1"))
        );
        assert_eq!(c.sink().registered.borrow().as_slice(), ["tok-1"]);
    }

    #[test]
    fn test_reregistering_same_token_is_noop() {
        let mut c = client();
        let token = DeviceToken::new("tok-1");
        c.register(PermissionState::Granted, token.clone()).unwrap();
        c.register(PermissionState::Granted, token).unwrap();

        assert_eq!(c.sink().registered.borrow().len(), 1);
    }

    #[test]
    fn test_new_token_replaces_registration() {
        let mut c = client();
        c.register(PermissionState::Granted, DeviceToken::new("tok-1"))
            .unwrap();
        c.register(PermissionState::Granted, DeviceToken::new("tok-2"))
            .unwrap();

        assert_eq!(
            *c.state(),
            RegistrationState::Registered(DeviceToken::new("tok-2"))
        );
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut c = client();
        c.unregister().unwrap();
        c.unregister().unwrap();
        assert!(c.sink().unregistered.borrow().is_empty());
    }

    #[test]
    fn test_unregister_drops_cached_token() {
        let store = Store::open_default().unwrap();
        let mut c = PushClient::new(PushConfig::new("sender-1"), MockSink::default(), store.clone());
        c.register(PermissionState::Granted, DeviceToken::new("tok-1"))
            .unwrap();
        assert!(store.exists(keys::device_token_key()).unwrap());

        c.unregister().unwrap();

        assert_eq!(*c.state(), RegistrationState::Idle);
        assert!(!store.exists(keys::device_token_key()).unwrap());
        assert_eq!(c.sink().unregistered.borrow().as_slice(), ["tok-1"]);
    }

    #[test]
    fn test_new_restores_cached_token() {
        let store = Store::open_default().unwrap();
        store
            .set(keys::device_token_key(), &DeviceToken::new("tok-9"))
            .unwrap();

        let c = PushClient::new(PushConfig::new("sender-1"), MockSink::default(), store);
        assert_eq!(
            *c.state(),
            RegistrationState::Registered(DeviceToken::new("tok-9"))
        );
    }

    #[test]
    fn test_sink_failure_still_drops_local_token() {
        struct FailingSink;
        impl TokenSink for FailingSink {
            fn register_token(&self, _token: &DeviceToken) -> Result<(), SinkError> {
                Ok(())
            }
            fn unregister_token(&self, _token: &DeviceToken) -> Result<(), SinkError> {
                Err(SinkError("backend down".to_string()))
            }
        }

        let store = Store::open_default().unwrap();
        let mut c = PushClient::new(PushConfig::new("sender-1"), FailingSink, store.clone());
        c.register(PermissionState::Granted, DeviceToken::new("tok-1"))
            .unwrap();

        c.unregister().unwrap();
        assert!(!store.exists(keys::device_token_key()).unwrap());
    }
}
