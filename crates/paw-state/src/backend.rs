//! Backend ports implemented by the service layer.

use crate::error::BackendError;
use paw_commerce::cart::Cart;
use paw_commerce::favorites::FavoriteProduct;
use paw_commerce::ids::{ProductId, UserId};
use paw_commerce::taxes::Taxes;

/// Persists the full cart after every mutation.
pub trait CartBackend {
    /// Save the complete cart state, including recomputed totals.
    fn save_cart(&self, cart: &Cart, taxes: &Taxes) -> Result<(), BackendError>;
}

/// Server-side favorites membership.
pub trait FavoritesBackend {
    fn add_favorite(&self, user: &UserId, favorite: &FavoriteProduct)
        -> Result<(), BackendError>;
    fn remove_favorite(&self, user: &UserId, product: &ProductId) -> Result<(), BackendError>;
}

/// Payment verification endpoint.
pub trait PaymentVerifier {
    /// Confirm a payment with the backend. `Ok(true)` means the signature
    /// checked out and the charge is confirmed.
    fn verify(&self, request: &crate::payment::VerificationRequest)
        -> Result<bool, BackendError>;
}
