//! Push token registration endpoints.

use crate::{ApiClient, ApiError};
use paw_notify::{DeviceToken, SinkError, TokenSink};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRegistration<'a> {
    token: &'a str,
}

/// Notification service; backs the push client's token sink.
pub struct NotificationService {
    client: ApiClient,
}

impl NotificationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn register(&self, token: &DeviceToken) -> Result<(), ApiError> {
        self.client
            .post("/notifications/tokens")
            .json(&TokenRegistration {
                token: token.as_str(),
            })?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn unregister(&self, token: &DeviceToken) -> Result<(), ApiError> {
        self.client
            .delete(format!("/notifications/tokens/{}", token))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

impl TokenSink for NotificationService {
    fn register_token(&self, token: &DeviceToken) -> Result<(), SinkError> {
        self.register(token)?;
        Ok(())
    }

    fn unregister_token(&self, token: &DeviceToken) -> Result<(), SinkError> {
        self.unregister(token)?;
        Ok(())
    }
}
