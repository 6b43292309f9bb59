//! Cart and line item types.
//!
//! Line items are identified by a composite key of product id plus
//! normalized variant details. Every cart operation keys on that composite,
//! so two entries for the same product in different sizes are always
//! distinct line items and are added, updated, and removed independently.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// Variant attributes selected when adding a product to the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemDetails {
    /// Selected size, if the product has sizes.
    pub size: Option<String>,
    /// Selected color, if the product has colors.
    pub color: Option<String>,
}

impl ItemDetails {
    /// Details with no variant attributes.
    pub fn none() -> Self {
        Self::default()
    }

    /// Details with a size only.
    pub fn size(size: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
            color: None,
        }
    }

    /// Normalize for identity comparison: trim whitespace, lowercase, and
    /// treat empty strings as absent.
    pub fn normalized(&self) -> Self {
        fn norm(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
        }
        Self {
            size: norm(&self.size),
            color: norm(&self.color),
        }
    }

    /// Check if no variant attributes are set.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.color.is_none()
    }
}

/// Composite identity of a line item: product id + normalized details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    product_id: ProductId,
    details: ItemDetails,
}

impl LineKey {
    /// Build a key, normalizing the details.
    pub fn new(product_id: ProductId, details: ItemDetails) -> Self {
        Self {
            product_id,
            details: details.normalized(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }
}

/// A line item in the cart: a product snapshot plus selected details and
/// quantity. Line totals are never stored; they are recomputed from
/// `unit_price` and `quantity` on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Full-size image URL.
    pub image: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail: Option<String>,
    /// Product category.
    pub category: String,
    /// Selected variant details (normalized).
    pub details: ItemDetails,
    /// Quantity (always >= 1).
    pub quantity: i64,
}

impl LineItem {
    /// Snapshot a product into a line item with quantity one.
    pub fn from_product(product: &Product, details: ItemDetails) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            thumbnail: product.thumbnail.clone(),
            category: product.category.clone(),
            details: details.normalized(),
            quantity: 1,
        }
    }

    /// The composite identity of this line item.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.details.clone())
    }

    /// Compute the line total (unit_price × quantity).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            updated_at: current_timestamp(),
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same composite key exists, its quantity is
    /// incremented by one; otherwise a new line item with quantity one is
    /// appended. Returns the key of the affected line item.
    pub fn add_item(
        &mut self,
        product: &Product,
        details: ItemDetails,
    ) -> Result<LineKey, CommerceError> {
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let key = LineKey::new(product.id.clone(), details.clone());
        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == key) {
            let new_quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
        } else {
            self.items.push(LineItem::from_product(product, details));
        }
        self.updated_at = current_timestamp();
        Ok(key)
    }

    /// Update a line item's quantity.
    ///
    /// A quantity below one removes the item; a zero-quantity line item
    /// never exists. Returns whether the cart changed.
    pub fn update_quantity(
        &mut self,
        key: &LineKey,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity < 1 {
            return Ok(self.remove_item(key));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.key() == key) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove the line item with the given key.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.key() != key);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get a line item by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key() == key)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute the subtotal: Σ(unit_price × quantity) over current items.
    ///
    /// Always recomputed, never cached.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            let line = item.line_total()?;
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_minor: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::new(price_minor, Currency::INR),
            "dog-food",
        )
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap().amount_minor, 0);
    }

    #[test]
    fn test_add_item_increments_quantity() {
        let mut cart = Cart::new(Currency::INR);
        let p = product("a", 1000);

        for _ in 0..3 {
            cart.add_item(&p, ItemDetails::none()).unwrap();
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_details_distinguish_line_items() {
        let mut cart = Cart::new(Currency::INR);
        let p = product("a", 1000);

        cart.add_item(&p, ItemDetails::size("Small")).unwrap();
        cart.add_item(&p, ItemDetails::size("Large")).unwrap();

        assert_eq!(cart.unique_item_count(), 2);

        // Removing one variant leaves the other untouched.
        let small = LineKey::new(ProductId::new("a"), ItemDetails::size("small"));
        assert!(cart.remove_item(&small));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(
            cart.items[0].details.size.as_deref(),
            Some("large")
        );
    }

    #[test]
    fn test_details_normalization() {
        let mut cart = Cart::new(Currency::INR);
        let p = product("a", 1000);

        cart.add_item(&p, ItemDetails::size("  Large ")).unwrap();
        cart.add_item(&p, ItemDetails::size("large")).unwrap();

        // Same normalized key: one line item, quantity two.
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_empty_string_details_equal_none() {
        let details = ItemDetails {
            size: Some("  ".to_string()),
            color: Some(String::new()),
        };
        assert!(details.normalized().is_empty());
    }

    #[test]
    fn test_subtotal_recomputed() {
        let mut cart = Cart::new(Currency::INR);
        let a = product("a", 1000);
        let b = product("b", 2500);

        let key_a = cart.add_item(&a, ItemDetails::none()).unwrap();
        cart.add_item(&a, ItemDetails::none()).unwrap();
        cart.add_item(&b, ItemDetails::none()).unwrap();
        assert_eq!(cart.subtotal().unwrap().amount_minor, 4500);

        cart.update_quantity(&key_a, 5).unwrap();
        assert_eq!(cart.subtotal().unwrap().amount_minor, 7500);
    }

    #[test]
    fn test_zero_and_negative_quantity_remove() {
        for qty in [0, -1] {
            let mut cart = Cart::new(Currency::INR);
            let p = product("a", 1000);
            let key = cart.add_item(&p, ItemDetails::none()).unwrap();

            assert!(cart.update_quantity(&key, qty).unwrap());
            assert!(cart.is_empty());
            assert_eq!(cart.subtotal().unwrap().amount_minor, 0);
        }
    }

    #[test]
    fn test_update_quantity_missing_key() {
        let mut cart = Cart::new(Currency::INR);
        let key = LineKey::new(ProductId::new("ghost"), ItemDetails::none());
        assert!(!cart.update_quantity(&key, 3).unwrap());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new(Currency::INR);
        let p = product("a", 1000);
        let key = cart.add_item(&p, ItemDetails::none()).unwrap();

        let result = cart.update_quantity(&key, MAX_QUANTITY_PER_ITEM + 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new(Currency::INR);
        let p = Product::new(
            ProductId::new("x"),
            "Imported Treats",
            Money::new(999, Currency::USD),
            "treats",
        );
        assert!(cart.add_item(&p, ItemDetails::none()).is_err());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(&product("a", 1000), ItemDetails::none())
            .unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap().amount_minor, 0);
    }

    #[test]
    fn test_worked_scenario() {
        // Product A priced 10.00, quantity 1 -> add again -> qty 2, 20.00.
        let mut cart = Cart::new(Currency::INR);
        let a = product("a", 1000);

        let key = cart.add_item(&a, ItemDetails::none()).unwrap();
        cart.add_item(&a, ItemDetails::none()).unwrap();
        assert_eq!(cart.get(&key).unwrap().quantity, 2);
        assert_eq!(cart.subtotal().unwrap().amount_minor, 2000);

        cart.update_quantity(&key, 1).unwrap();
        assert_eq!(cart.subtotal().unwrap().amount_minor, 1000);

        cart.remove_item(&key);
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap().amount_minor, 0);
    }
}
