//! HTTP request builder and multipart form support.

use crate::ApiError;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods used by the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) method: Method,
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Set the request body to a multipart form.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.headers
            .insert("Content-Type".to_string(), form.content_type());
        self.body = Some(form.into_body());
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }
}

/// A `multipart/form-data` body, used by the image upload endpoint.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        let boundary: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        Self {
            boundary: format!("pawmart-{}", boundary),
            body: Vec::new(),
        }
    }

    #[cfg(test)]
    fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    /// Add a plain text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Add a file part.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, filename
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// The Content-Type header value for this form.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Finish the form and return the body bytes.
    pub fn into_body(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_content_type() {
        use serde::Serialize;
        #[derive(Serialize)]
        struct Body {
            name: String,
        }

        let builder = RequestBuilder::new(Method::Post, "https://api.pawmart.test/products")
            .json(&Body {
                name: "Rope Toy".to_string(),
            })
            .unwrap();

        assert_eq!(
            builder.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(builder.body.unwrap(), br#"{"name":"Rope Toy"}"#);
    }

    #[test]
    fn test_bearer_auth_header() {
        let builder = RequestBuilder::new(Method::Get, "https://api.pawmart.test/users/me")
            .bearer_auth("tok-123");
        assert_eq!(
            builder.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-123")
        );
    }

    #[test]
    fn test_multipart_body_layout() {
        let form = MultipartForm::with_boundary("XBOUNDARY")
            .text("kind", "product-image")
            .file("file", "pup.jpg", "image/jpeg", b"JPEGDATA");

        assert_eq!(
            form.content_type(),
            "multipart/form-data; boundary=XBOUNDARY"
        );

        let body = String::from_utf8(form.into_body()).unwrap();
        assert_eq!(
            body,
            "--XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"kind\"\r\n\r\n\
             product-image\r\n\
             --XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"pup.jpg\"\r\n\
             Content-Type: image/jpeg\r\n\r\n\
             JPEGDATA\r\n\
             --XBOUNDARY--\r\n"
        );
    }

    #[test]
    fn test_generated_boundaries_differ() {
        let a = MultipartForm::new();
        let b = MultipartForm::new();
        assert_ne!(a.content_type(), b.content_type());
    }
}
