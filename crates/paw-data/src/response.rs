//! HTTP response handling.

use crate::ApiError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response from the storefront API.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, ApiError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| ApiError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error body, usually the backend's JSON error message, is carried
    /// into the error for display.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(301, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_json_parses_order_status() {
        use paw_commerce::order::PaymentStatus;

        let resp = make_response(200, br#""PAYMENT_TIMEOUT""#);
        let status: PaymentStatus = resp.json().unwrap();
        assert_eq!(status, PaymentStatus::PaymentTimeout);
    }

    #[test]
    fn test_json_rejects_garbage() {
        let resp = make_response(200, b"<html>oops</html>");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(result.is_err());
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let resp = Response::new(200, headers, Vec::new());

        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status_carries_body() {
        let resp = make_response(404, b"order not found");
        match resp.error_for_status() {
            Err(ApiError::HttpError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "order not found");
            }
            other => panic!("expected HttpError, got {:?}", other.map(|r| r.status)),
        }
    }
}
