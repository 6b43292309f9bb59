//! Cart persistence and order endpoints.

use crate::{ApiClient, ApiError};
use paw_commerce::cart::Cart;
use paw_commerce::ids::{OrderId, UserId};
use paw_commerce::order::{Order, OrderDraft};
use paw_commerce::taxes::Taxes;
use paw_state::{BackendError, CartBackend};
use serde::{Deserialize, Serialize};

/// The full-cart record sent to the backend after every cart mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSaveRequest {
    pub session_id: String,
    pub cart: Cart,
    pub taxes: Taxes,
}

/// Order service; also serves as the cart persistence backend.
pub struct OrderService {
    client: ApiClient,
    session_id: String,
}

impl OrderService {
    pub fn new(client: ApiClient, session_id: impl Into<String>) -> Self {
        Self {
            client,
            session_id: session_id.into(),
        }
    }

    /// Persist the full cart state for this session.
    pub fn save_cart_record(&self, cart: &Cart, taxes: &Taxes) -> Result<(), ApiError> {
        let record = CartSaveRequest {
            session_id: self.session_id.clone(),
            cart: cart.clone(),
            taxes: *taxes,
        };
        self.client
            .post("/carts")
            .json(&record)?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Fetch the server's cart record for this session, if one exists.
    pub fn fetch_cart(&self) -> Result<Option<Cart>, ApiError> {
        let response = self
            .client
            .get(format!("/carts/{}", self.session_id))
            .send()?;
        if response.status == 404 {
            return Ok(None);
        }
        let record: CartSaveRequest = response.error_for_status()?.json()?;
        Ok(Some(record.cart))
    }

    /// Submit an order draft; the server's order record comes back.
    pub fn place_order(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        self.client
            .post("/orders")
            .json(draft)?
            .send()?
            .error_for_status()?
            .json()
    }

    /// List a user's orders, newest first.
    pub fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, ApiError> {
        self.client
            .get(format!("/users/{}/orders", user))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Fetch one order.
    pub fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.client
            .get(format!("/orders/{}", id))
            .send()?
            .error_for_status()?
            .json()
    }
}

impl CartBackend for OrderService {
    fn save_cart(&self, cart: &Cart, taxes: &Taxes) -> Result<(), BackendError> {
        self.save_cart_record(cart, taxes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paw_commerce::cart::ItemDetails;
    use paw_commerce::catalog::Product;
    use paw_commerce::ids::ProductId;
    use paw_commerce::money::{Currency, Money};

    #[test]
    fn test_cart_save_request_wire_shape() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(
            &Product::new(
                ProductId::new("prod-1"),
                "Rope Toy",
                Money::new(19900, Currency::INR),
                "toys",
            ),
            ItemDetails::none(),
        )
        .unwrap();

        let record = CartSaveRequest {
            session_id: "sess_abc".to_string(),
            cart,
            taxes: Taxes::zero(Currency::INR),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sessionId"], "sess_abc");
        assert_eq!(json["cart"]["items"][0]["quantity"], 1);

        let parsed: CartSaveRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}
