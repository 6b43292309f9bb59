//! Payment reinitiation flow.
//!
//! Lets a user retry payment for an order left in a pending, timed-out, or
//! failed state: reinitiation hands off to the provider's hosted flow, and
//! the provider callback is confirmed with the verification endpoint.
//! Verification failure is the one unsafe partial-failure state here: money
//! may have moved without local confirmation, so it surfaces as a
//! contact-support error and is never auto-retried.

use crate::backend::PaymentVerifier;
use paw_commerce::ids::OrderId;
use paw_commerce::money::Money;
use paw_commerce::order::{Order, PaymentStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Payment-specific errors, split by severity.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Reinitiation attempted from an ineligible order status.
    #[error("Order {order} is {status}; payment cannot be re-attempted")]
    Ineligible { order: OrderId, status: &'static str },

    /// The provider reported an error during the hosted flow.
    #[error("Payment provider error: {0}")]
    Provider(String),

    /// The user dismissed the payment flow.
    #[error("Payment cancelled by user")]
    Cancelled,

    /// The verification endpoint could not confirm the charge.
    ///
    /// Most severe: the charge may have gone through. The user must be
    /// directed to support; do not retry.
    #[error("Payment verification failed for order {0}; contact support")]
    VerificationFailed(OrderId),
}

/// Request handed to the provider's hosted checkout flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub order_id: OrderId,
    pub amount: Money,
}

/// Payload for the verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationRequest {
    pub order_id: OrderId,
    pub payment_id: String,
    pub signature: String,
}

/// What the provider's hosted flow reported back.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCallback {
    /// The provider believes the payment succeeded.
    Success {
        payment_id: String,
        signature: String,
    },
    /// The user closed the flow without paying.
    Dismissed,
    /// The provider reported an error.
    Error(String),
}

/// Drives a payment re-attempt for an eligible order.
pub struct ReinitiationFlow<V: PaymentVerifier> {
    verifier: V,
}

impl<V: PaymentVerifier> ReinitiationFlow<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// Begin reinitiation.
    ///
    /// Permitted only from `PAYMENT_PENDING`, `PAYMENT_TIMEOUT`, or
    /// `FAILED`; any other status is rejected without side effects.
    pub fn begin(&self, order: &Order) -> Result<CheckoutRequest, PaymentError> {
        if !order.can_reinitiate() {
            return Err(PaymentError::Ineligible {
                order: order.id.clone(),
                status: order.status.as_str(),
            });
        }
        Ok(CheckoutRequest {
            order_id: order.id.clone(),
            amount: order.grand_total,
        })
    }

    /// Complete the flow from the provider callback.
    ///
    /// On provider success the charge is confirmed with the verification
    /// endpoint before the order is marked `SUCCESSFULL`. A dismissal marks
    /// the order `CANCELLED`. A provider error leaves the status unchanged
    /// so the order stays eligible for another attempt.
    pub fn complete(
        &self,
        order: &mut Order,
        callback: ProviderCallback,
    ) -> Result<PaymentStatus, PaymentError> {
        match callback {
            ProviderCallback::Success {
                payment_id,
                signature,
            } => {
                let request = VerificationRequest {
                    order_id: order.id.clone(),
                    payment_id,
                    signature,
                };
                match self.verifier.verify(&request) {
                    Ok(true) => {
                        order.set_status(PaymentStatus::Successful);
                        Ok(PaymentStatus::Successful)
                    }
                    Ok(false) => {
                        error!(order = %order.id, "payment verification rejected");
                        Err(PaymentError::VerificationFailed(order.id.clone()))
                    }
                    Err(e) => {
                        error!(order = %order.id, error = %e, "payment verification unreachable");
                        Err(PaymentError::VerificationFailed(order.id.clone()))
                    }
                }
            }
            ProviderCallback::Dismissed => {
                order.set_status(PaymentStatus::Cancelled);
                Ok(PaymentStatus::Cancelled)
            }
            ProviderCallback::Error(message) => Err(PaymentError::Provider(message)),
        }
    }
}
