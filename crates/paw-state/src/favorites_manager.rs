//! Favorites manager.
//!
//! Toggles product membership in the user's favorites, optimistically
//! mirrored in local state and backed by the server. Backend failures are
//! logged; local state is not rolled back.

use crate::backend::FavoritesBackend;
use crate::error::StateError;
use paw_commerce::catalog::Product;
use paw_commerce::favorites::{FavoriteList, FavoriteProduct};
use paw_commerce::ids::UserId;
use tracing::warn;

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Manages the user's favorites.
pub struct FavoritesManager<B: FavoritesBackend> {
    favorites: FavoriteList,
    backend: B,
}

impl<B: FavoritesBackend> FavoritesManager<B> {
    /// Create a manager with an empty list.
    pub fn new(backend: B) -> Self {
        Self {
            favorites: FavoriteList::new(),
            backend,
        }
    }

    /// Overwrite local state with the server's list.
    pub fn load(&mut self, favorites: FavoriteList) {
        self.favorites = favorites;
    }

    /// The current favorites.
    pub fn favorites(&self) -> &FavoriteList {
        &self.favorites
    }

    /// The backend handle.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Toggle a product's favorite membership.
    ///
    /// Requires an authenticated user id; otherwise reports an error and
    /// performs no action.
    pub fn toggle(
        &mut self,
        user: Option<&UserId>,
        product: &Product,
    ) -> Result<ToggleOutcome, StateError> {
        let user = user.ok_or(StateError::NotAuthenticated)?;

        if self.favorites.contains(&product.id) {
            self.favorites.remove(&product.id);
            if let Err(e) = self.backend.remove_favorite(user, &product.id) {
                warn!(error = %e, product = %product.id, "remove favorite failed");
            }
            Ok(ToggleOutcome::Removed)
        } else {
            let favorite = FavoriteProduct::from(product);
            self.favorites.insert(favorite.clone());
            if let Err(e) = self.backend.add_favorite(user, &favorite) {
                warn!(error = %e, product = %product.id, "add favorite failed");
            }
            Ok(ToggleOutcome::Added)
        }
    }
}
