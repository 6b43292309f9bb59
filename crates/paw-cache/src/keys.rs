//! Storage key builders.
//!
//! All locally cached state lives under a small set of namespaced keys so
//! the reset paths can clear exactly what they own.

/// Key for the cached cart snapshot of a session.
pub fn cart_key(session_id: &str) -> String {
    format!("cart:{}", session_id)
}

/// Key for the stored user identity.
pub fn identity_key() -> &'static str {
    "identity"
}

/// Key for the registered push device token.
pub fn device_token_key() -> &'static str {
    "push:device_token"
}
