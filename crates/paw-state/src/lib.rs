//! Client state layer for PawMart.
//!
//! Holds the optimistic local state the storefront works against and keeps
//! it in sync with the backend after every mutation:
//!
//! - [`CartManager`]: the session's cart, persisted in full after each
//!   mutation
//! - [`OrderContext`]: tax and shipping aggregation for checkout
//! - [`FavoritesManager`]: server-backed favorites, mirrored optimistically
//! - [`payment::ReinitiationFlow`]: payment retry with verification
//!
//! Backend access goes through the ports in [`backend`], implemented by the
//! service layer and mocked in tests.

pub mod backend;
pub mod cart_manager;
mod error;
pub mod favorites_manager;
pub mod order_context;
pub mod payment;

pub use backend::{CartBackend, FavoritesBackend, PaymentVerifier};
pub use cart_manager::CartManager;
pub use error::{BackendError, StateError};
pub use favorites_manager::{FavoritesManager, ToggleOutcome};
pub use order_context::{OrderContext, OrderSummary};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::{CartBackend, FavoritesBackend, PaymentVerifier};
    pub use crate::cart_manager::CartManager;
    pub use crate::error::{BackendError, StateError};
    pub use crate::favorites_manager::{FavoritesManager, ToggleOutcome};
    pub use crate::order_context::{OrderContext, OrderSummary};
    pub use crate::payment::{
        CheckoutRequest, PaymentError, ProviderCallback, ReinitiationFlow, VerificationRequest,
    };
}
