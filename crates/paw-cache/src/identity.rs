//! Stored user identity.
//!
//! The storefront keeps the authenticated user's id and token locally so a
//! page reload does not require a fresh login. `clear` is the logout path:
//! it drops every identity field from the store.

use crate::{keys, CacheError, Store};
use serde::{Deserialize, Serialize};

/// Locally persisted user identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredIdentity {
    /// Authenticated user's uuid, if logged in.
    pub user_id: Option<String>,
    /// Bearer token for API calls.
    pub auth_token: Option<String>,
    /// Anonymous session identifier.
    pub session_id: String,
}

impl StoredIdentity {
    /// A fresh anonymous identity with a generated session id.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            auth_token: None,
            session_id: generate_session_id(),
        }
    }

    /// Check if an authenticated user is stored.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some() && self.auth_token.is_some()
    }

    /// Load the stored identity, creating an anonymous one if absent.
    pub fn load_or_create(store: &Store) -> Result<Self, CacheError> {
        match store.get::<StoredIdentity>(keys::identity_key())? {
            Some(identity) => Ok(identity),
            None => {
                let identity = Self::anonymous();
                store.set(keys::identity_key(), &identity)?;
                Ok(identity)
            }
        }
    }

    /// Persist this identity.
    pub fn save(&self, store: &Store) -> Result<(), CacheError> {
        store.set(keys::identity_key(), self)
    }

    /// Drop all stored identity keys (logout / session invalidation).
    pub fn clear(store: &Store) -> Result<(), CacheError> {
        store.delete(keys::identity_key())?;
        store.delete(keys::device_token_key())
    }
}

/// Generate a random session identifier.
fn generate_session_id() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 18] = rand::thread_rng().gen();
    format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_identity() {
        let identity = StoredIdentity::anonymous();
        assert!(!identity.is_authenticated());
        assert!(identity.session_id.starts_with("sess_"));
    }

    #[test]
    fn test_session_ids_unique() {
        let a = StoredIdentity::anonymous();
        let b = StoredIdentity::anonymous();
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_load_or_create_persists() {
        let store = Store::open_default().unwrap();
        let created = StoredIdentity::load_or_create(&store).unwrap();
        let loaded = StoredIdentity::load_or_create(&store).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn test_save_and_clear() {
        let store = Store::open_default().unwrap();
        let mut identity = StoredIdentity::anonymous();
        identity.user_id = Some("user-1".to_string());
        identity.auth_token = Some("token".to_string());
        identity.save(&store).unwrap();

        assert!(StoredIdentity::load_or_create(&store)
            .unwrap()
            .is_authenticated());

        StoredIdentity::clear(&store).unwrap();
        assert!(!store.exists(keys::identity_key()).unwrap());
    }
}
