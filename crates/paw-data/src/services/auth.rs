//! Authentication endpoints.

use crate::{ApiClient, ApiError};
use paw_cache::StoredIdentity;
use serde::{Deserialize, Serialize};

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New account details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: String,
    pub token: String,
}

impl AuthResponse {
    /// Fold this response into a stored identity, keeping the session id.
    pub fn into_identity(self, session_id: String) -> StoredIdentity {
        StoredIdentity {
            user_id: Some(self.user_id),
            auth_token: Some(self.token),
            session_id,
        }
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Authentication service.
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sign in with email and password.
    pub fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .post("/auth/login")
            .json(request)?
            .send()?
            .error_for_status()?
            .json()
    }

    /// Create an account. The backend signs the new user in directly.
    pub fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .post("/auth/register")
            .json(request)?
            .send()?
            .error_for_status()?
            .json()
    }

    /// Fetch the signed-in user's profile. Requires a bearer token on the
    /// client.
    pub fn profile(&self) -> Result<UserProfile, ApiError> {
        self.client
            .get("/users/me")
            .send()?
            .error_for_status()?
            .json()
    }

    /// Update the signed-in user's profile.
    pub fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        self.client
            .put("/users/me")
            .json(profile)?
            .send()?
            .error_for_status()?
            .json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_wire_shape() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"userId": "user-42", "token": "jwt-abc"}"#,
        )
        .unwrap();
        assert_eq!(response.user_id, "user-42");

        let identity = response.into_identity("sess_xyz".to_string());
        assert!(identity.is_authenticated());
        assert_eq!(identity.session_id, "sess_xyz");
    }

    #[test]
    fn test_login_request_wire_shape() {
        let json = serde_json::to_value(&LoginRequest {
            email: "asha@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .unwrap();
        assert_eq!(json["email"], "asha@example.com");
        assert!(json.get("Email").is_none());
    }
}
