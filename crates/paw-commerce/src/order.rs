//! Order types and the payment status machine.

use crate::address::Address;
use crate::cart::{Cart, LineItem};
use crate::error::CommerceError;
use crate::ids::{OrderId, UserId};
use crate::money::{Currency, Money};
use crate::shipping::ShippingSelection;
use crate::taxes::Taxes;
use serde::{Deserialize, Serialize};

/// Payment status of an order.
///
/// The variant names on the wire are dictated by the backend contract,
/// including the `SUCCESSFULL` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// Order created, payment not yet attempted.
    #[default]
    #[serde(rename = "CREATED")]
    Created,
    /// Payment initiated, awaiting confirmation.
    #[serde(rename = "PAYMENT_PENDING")]
    PaymentPending,
    /// Payment attempt timed out.
    #[serde(rename = "PAYMENT_TIMEOUT")]
    PaymentTimeout,
    /// Payment attempt failed.
    #[serde(rename = "FAILED")]
    Failed,
    /// Payment confirmed by verification.
    #[serde(rename = "SUCCESSFULL")]
    Successful,
    /// Payment cancelled by the user.
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Created => "CREATED",
            PaymentStatus::PaymentPending => "PAYMENT_PENDING",
            PaymentStatus::PaymentTimeout => "PAYMENT_TIMEOUT",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Successful => "SUCCESSFULL",
            PaymentStatus::Cancelled => "CANCELLED",
        }
    }

    /// Check whether payment can be re-attempted from this status.
    ///
    /// Only pending, timed-out, and failed payments are eligible; a
    /// successful or cancelled order must never expose the retry control.
    pub fn can_reinitiate(&self) -> bool {
        matches!(
            self,
            PaymentStatus::PaymentPending
                | PaymentStatus::PaymentTimeout
                | PaymentStatus::Failed
        )
    }

    /// Check if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Successful | PaymentStatus::Cancelled)
    }
}

/// An order as persisted by the backend.
///
/// The server's copy is authoritative: the client overwrites its local
/// state with this record on load and after every mutation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer user ID (None for guest checkout).
    pub user_id: Option<UserId>,
    /// Line items in the order.
    pub items: Vec<LineItem>,
    /// Subtotal at order time.
    pub subtotal: Money,
    /// Taxes and charges at order time.
    pub taxes: Taxes,
    /// Grand total charged.
    pub grand_total: Money,
    /// Order currency.
    pub currency: Currency,
    /// Shipping address.
    pub shipping_address: Address,
    /// Billing address.
    pub billing_address: Address,
    /// Selected shipping method.
    pub shipping: Option<ShippingSelection>,
    /// Payment status.
    pub status: PaymentStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("PM-{}", ts)
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check whether payment can be re-attempted.
    pub fn can_reinitiate(&self) -> bool {
        self.status.can_reinitiate()
    }

    /// Update the payment status.
    pub fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }
}

/// The order record submitted to the backend at checkout.
///
/// Totals are computed here from the cart and taxes so the submitted
/// numbers match what the checkout summary displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Customer user ID.
    pub user_id: Option<UserId>,
    /// Line items.
    pub items: Vec<LineItem>,
    /// Computed subtotal.
    pub subtotal: Money,
    /// Taxes and charges.
    pub taxes: Taxes,
    /// Computed grand total (subtotal + taxes).
    pub grand_total: Money,
    /// Order currency.
    pub currency: Currency,
    /// Shipping address.
    pub shipping_address: Address,
    /// Billing address.
    pub billing_address: Address,
    /// Selected shipping method.
    pub shipping: Option<ShippingSelection>,
}

impl OrderDraft {
    /// Build a draft from the current cart and checkout context.
    pub fn from_cart(
        cart: &Cart,
        taxes: Taxes,
        shipping: Option<ShippingSelection>,
        user_id: Option<UserId>,
        shipping_address: Address,
        billing_address: Address,
    ) -> Result<Self, CommerceError> {
        let subtotal = cart.subtotal()?;
        let charges = taxes.total()?;
        let grand_total = subtotal
            .try_add(&charges)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            user_id,
            items: cart.items.clone(),
            subtotal,
            taxes,
            grand_total,
            currency: cart.currency,
            shipping_address,
            billing_address,
            shipping,
        })
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
