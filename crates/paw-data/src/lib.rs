//! HTTP client and typed REST services for the PawMart storefront.
//!
//! [`ApiClient`] is a thin wrapper over Spin's outbound HTTP support with a
//! builder API, base-URL joining, and bearer authentication. The modules
//! under [`services`] layer typed endpoints on top of it and implement the
//! backend ports the state layer consumes.
//!
//! # Example
//!
//! ```rust,ignore
//! use paw_data::{ApiClient, StorefrontConfig};
//! use paw_data::services::products::ProductService;
//!
//! let config = StorefrontConfig::from_toml_str(raw_config)?;
//! let client = ApiClient::from_config(&config);
//! let products = ProductService::new(client.clone(), config.currency());
//! let kibble = products.by_category("dog-food")?;
//! ```

mod config;
mod error;
mod request;
mod response;
pub mod services;

pub use config::StorefrontConfig;
pub use error::ApiError;
pub use request::{Method, MultipartForm, RequestBuilder};
pub use response::Response;

/// HTTP client bound to the storefront API.
///
/// Cheap to clone; each service owns its own handle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    default_headers: std::collections::HashMap<String, String>,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: std::collections::HashMap::new(),
            auth_token: None,
        }
    }

    /// Create a client from the storefront configuration.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Attach the bearer token sent with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set or clear the bearer token on an existing client.
    pub fn set_bearer_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    /// Create a GET request.
    pub fn get(&self, path: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, path)
    }

    /// Create a POST request.
    pub fn post(&self, path: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, path)
    }

    /// Create a PUT request.
    pub fn put(&self, path: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, path)
    }

    /// Create a PATCH request.
    pub fn patch(&self, path: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Patch, path)
    }

    /// Create a DELETE request.
    pub fn delete(&self, path: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, path)
    }

    /// Create a request with a custom method.
    ///
    /// Relative paths are joined onto the base URL; absolute URLs pass
    /// through untouched.
    pub fn request(&self, method: Method, path: impl Into<String>) -> ClientRequestBuilder {
        let path = path.into();
        let full_url = if path.starts_with("http://") || path.starts_with("https://") {
            path
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the request body to a multipart form.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.builder = self.builder.multipart(form);
        self
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, ApiError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.builder.url);

        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let request = if let Some(body) = self.builder.body {
            request
                .body(body)
                .map_err(|e| ApiError::RequestError(e.to_string()))?
        } else {
            request.build()
        };

        let response =
            spin_sdk::http::send(request).map_err(|e| ApiError::RequestError(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, ApiError> {
        // Empty response for non-WASM builds (testing/development)
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            Vec::new(),
        ))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiClient, ApiError, Method, MultipartForm, Response, StorefrontConfig};
}
