//! Cart state manager.
//!
//! Maintains the authoritative local line-item list for the session and
//! persists the full cart to the backend after every mutation. Mutations
//! are optimistic: a failed persistence call is logged and the local state
//! is kept, so client and server can diverge silently on network failure.
//! No retry is attempted.

use crate::backend::CartBackend;
use crate::error::StateError;
use paw_cache::{keys, Store, StoredIdentity};
use paw_commerce::cart::{Cart, ItemDetails, LineKey};
use paw_commerce::catalog::Product;
use paw_commerce::money::{Currency, Money};
use paw_commerce::taxes::Taxes;
use std::collections::HashSet;
use tracing::warn;

/// Manages the session's cart and its synchronization with the backend.
pub struct CartManager<B: CartBackend> {
    cart: Cart,
    taxes: Taxes,
    backend: B,
    store: Store,
    session_id: String,
    busy: HashSet<LineKey>,
}

impl<B: CartBackend> CartManager<B> {
    /// Create a manager with an empty cart.
    pub fn new(backend: B, store: Store, session_id: impl Into<String>, currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            taxes: Taxes::zero(currency),
            backend,
            store,
            session_id: session_id.into(),
            busy: HashSet::new(),
        }
    }

    /// Overwrite local state with the server's cart record.
    ///
    /// The server is authoritative on load; no merge is attempted.
    pub fn load(&mut self, cart: Cart) -> Result<(), StateError> {
        self.cart = cart;
        self.cache_snapshot()?;
        Ok(())
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backend handle (used by tests and the composition root).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current subtotal, always recomputed.
    pub fn subtotal(&self) -> Result<Money, StateError> {
        Ok(self.cart.subtotal()?)
    }

    /// Update the taxes sent along with cart persistence.
    pub fn set_taxes(&mut self, taxes: Taxes) {
        self.taxes = taxes;
    }

    /// Mark a line item's control as having a request in flight.
    ///
    /// Returns false if the control was already busy. This guards against
    /// double-submission from the same control; controls for other keys are
    /// not serialized.
    pub fn lock_control(&mut self, key: &LineKey) -> bool {
        self.busy.insert(key.clone())
    }

    /// Release a line item's control.
    pub fn release_control(&mut self, key: &LineKey) {
        self.busy.remove(key);
    }

    /// Add a product to the cart and persist.
    ///
    /// Returns the user-visible confirmation message.
    pub fn add_item(
        &mut self,
        product: &Product,
        details: ItemDetails,
    ) -> Result<String, StateError> {
        let key = LineKey::new(product.id.clone(), details.clone());
        self.ensure_not_busy(&key)?;

        self.cart.add_item(product, details)?;
        self.persist();
        Ok(format!("{} added to cart", product.name))
    }

    /// Update a line item's quantity and persist.
    ///
    /// A quantity below one removes the item.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> Result<(), StateError> {
        self.ensure_not_busy(key)?;

        self.cart.update_quantity(key, quantity)?;
        self.persist();
        Ok(())
    }

    /// Remove a line item and persist.
    pub fn remove_item(&mut self, key: &LineKey) -> Result<(), StateError> {
        self.ensure_not_busy(key)?;

        self.cart.remove_item(key);
        self.persist();
        Ok(())
    }

    /// Empty the cart, persist the empty cart, and drop the cached snapshot.
    pub fn clear_cart(&mut self) -> Result<(), StateError> {
        self.cart.clear();
        self.persist();
        self.store.delete(&keys::cart_key(&self.session_id))?;
        Ok(())
    }

    /// Clear the cart and drop the stored user identity keys.
    ///
    /// Used on logout and session invalidation.
    pub fn reset_cart(&mut self) -> Result<(), StateError> {
        self.clear_cart()?;
        StoredIdentity::clear(&self.store)?;
        Ok(())
    }

    fn ensure_not_busy(&self, key: &LineKey) -> Result<(), StateError> {
        if self.busy.contains(key) {
            return Err(StateError::ControlBusy(key.product_id().to_string()));
        }
        Ok(())
    }

    /// Persist the full cart. Failures are logged; local state is kept.
    fn persist(&mut self) {
        if let Err(e) = self.backend.save_cart(&self.cart, &self.taxes) {
            warn!(error = %e, "cart persistence failed; keeping local state");
        }
        if let Err(e) = self.cache_snapshot() {
            warn!(error = %e, "cart snapshot cache write failed");
        }
    }

    fn cache_snapshot(&self) -> Result<(), StateError> {
        self.store
            .set(&keys::cart_key(&self.session_id), &self.cart)?;
        Ok(())
    }
}
