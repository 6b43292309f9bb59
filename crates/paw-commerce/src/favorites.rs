//! Favorites types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A favorited product: the subset of product fields kept for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteProduct {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price at favorite time.
    pub price: Money,
    /// Thumbnail image URL.
    pub thumbnail: Option<String>,
    /// Product category.
    pub category: String,
}

impl From<&Product> for FavoriteProduct {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            category: product.category.clone(),
        }
    }
}

/// A user's favorites, mirrored locally from the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FavoriteList {
    entries: Vec<FavoriteProduct>,
}

impl FavoriteList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from backend entries.
    pub fn from_entries(entries: Vec<FavoriteProduct>) -> Self {
        Self { entries }
    }

    /// Check membership by product id.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|f| &f.product_id == product_id)
    }

    /// Insert a favorite. No-op if already present.
    pub fn insert(&mut self, favorite: FavoriteProduct) {
        if !self.contains(&favorite.product_id) {
            self.entries.push(favorite);
        }
    }

    /// Remove a favorite by product id. Returns whether one was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|f| &f.product_id != product_id);
        self.entries.len() < len_before
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over favorites.
    pub fn iter(&self) -> impl Iterator<Item = &FavoriteProduct> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        let mut p = Product::new(
            ProductId::new("prod-1"),
            "Rope Toy",
            Money::new(29900, Currency::INR),
            "toys",
        );
        p.thumbnail = Some("https://cdn.example.com/rope-thumb.jpg".to_string());
        p
    }

    #[test]
    fn test_favorite_derived_from_product() {
        let p = product();
        let fav = FavoriteProduct::from(&p);
        assert_eq!(fav.product_id, p.id);
        assert_eq!(fav.name, "Rope Toy");
        assert_eq!(fav.thumbnail, p.thumbnail);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let p = product();
        let mut list = FavoriteList::new();
        list.insert(FavoriteProduct::from(&p));
        list.insert(FavoriteProduct::from(&p));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove() {
        let p = product();
        let mut list = FavoriteList::new();
        list.insert(FavoriteProduct::from(&p));

        assert!(list.remove(&p.id));
        assert!(list.is_empty());
        assert!(!list.remove(&p.id));
    }
}
