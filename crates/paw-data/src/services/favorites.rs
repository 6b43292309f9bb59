//! Favorites endpoints.

use crate::{ApiClient, ApiError};
use paw_commerce::favorites::{FavoriteList, FavoriteProduct};
use paw_commerce::ids::{ProductId, UserId};
use paw_state::{BackendError, FavoritesBackend};

/// Favorites service; backs the favorites manager.
pub struct FavoritesService {
    client: ApiClient,
}

impl FavoritesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the user's favorites list.
    pub fn list(&self, user: &UserId) -> Result<FavoriteList, ApiError> {
        let entries: Vec<FavoriteProduct> = self
            .client
            .get(format!("/users/{}/favorites", user))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(FavoriteList::from_entries(entries))
    }

    fn add(&self, user: &UserId, favorite: &FavoriteProduct) -> Result<(), ApiError> {
        self.client
            .post(format!("/users/{}/favorites", user))
            .json(favorite)?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn remove(&self, user: &UserId, product: &ProductId) -> Result<(), ApiError> {
        self.client
            .delete(format!("/users/{}/favorites/{}", user, product))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

impl FavoritesBackend for FavoritesService {
    fn add_favorite(&self, user: &UserId, favorite: &FavoriteProduct) -> Result<(), BackendError> {
        self.add(user, favorite)?;
        Ok(())
    }

    fn remove_favorite(&self, user: &UserId, product: &ProductId) -> Result<(), BackendError> {
        self.remove(user, product)?;
        Ok(())
    }
}
