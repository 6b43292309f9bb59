//! Payment endpoints.
//!
//! The backend fronts the payment provider: reinitiation asks it for a
//! fresh checkout session, and the provider callback is confirmed through
//! the verification endpoint before an order is treated as paid.

use crate::{ApiClient, ApiError};
use paw_commerce::ids::OrderId;
use paw_state::payment::VerificationRequest;
use paw_state::{BackendError, PaymentVerifier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReinitiateRequest<'a> {
    order_id: &'a OrderId,
}

/// A checkout session minted by the payment provider.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// The provider's order reference.
    pub provider_order_id: String,
    /// Publishable key the hosted flow is opened with.
    pub key_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Currency code.
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    order_id: &'a OrderId,
    payment_id: &'a str,
    signature: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    valid: bool,
}

/// Payment service; backs the reinitiation flow's verifier port.
pub struct PaymentService {
    client: ApiClient,
}

impl PaymentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask the backend for a fresh checkout session for the order.
    pub fn reinitiate(&self, order_id: &OrderId) -> Result<CheckoutSession, ApiError> {
        self.client
            .post("/payments/reinitiate")
            .json(&ReinitiateRequest { order_id })?
            .send()?
            .error_for_status()?
            .json()
    }

    /// Confirm a provider callback's signature with the backend.
    pub fn verify_payment(&self, request: &VerificationRequest) -> Result<bool, ApiError> {
        let response: VerifyResponse = self
            .client
            .post("/payments/verify")
            .json(&VerifyRequest {
                order_id: &request.order_id,
                payment_id: &request.payment_id,
                signature: &request.signature,
            })?
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.valid)
    }
}

impl PaymentVerifier for PaymentService {
    fn verify(&self, request: &VerificationRequest) -> Result<bool, BackendError> {
        Ok(self.verify_payment(request)?)
    }
}
