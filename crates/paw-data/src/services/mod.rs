//! Typed endpoints of the storefront REST API.
//!
//! Each service owns an [`ApiClient`](crate::ApiClient) handle and exposes
//! the endpoints of one backend resource. Services that back a state-layer
//! port ([`CartBackend`](paw_state::CartBackend),
//! [`FavoritesBackend`](paw_state::FavoritesBackend),
//! [`PaymentVerifier`](paw_state::PaymentVerifier),
//! [`TokenSink`](paw_notify::TokenSink)) implement it here so the
//! composition root can wire managers directly to the network.

pub mod addresses;
pub mod auth;
pub mod favorites;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod products;
pub mod shipping;
pub mod upload;

/// Percent-encode a query parameter value.
pub(crate) fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_passthrough() {
        assert_eq!(urlencode("dog-food"), "dog-food");
    }

    #[test]
    fn test_urlencode_spaces_and_symbols() {
        assert_eq!(urlencode("cat tree & scratcher"), "cat%20tree%20%26%20scratcher");
    }

    #[test]
    fn test_urlencode_utf8() {
        assert_eq!(urlencode("müsli"), "m%C3%BCsli");
    }
}
