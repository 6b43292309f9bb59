//! Product types as served by the catalog API.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Product is active and purchasable.
    #[default]
    Active,
    /// Product is listed but currently out of stock.
    OutOfStock,
    /// Product is no longer sold.
    Discontinued,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::OutOfStock => "out_of_stock",
            ProductStatus::Discontinued => "discontinued",
        }
    }
}

/// A product snapshot from the catalog.
///
/// The catalog API is authoritative; the client never mutates these fields.
/// Cart line items copy the fields they need at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Full-size image URL.
    pub image: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail: Option<String>,
    /// Category (e.g., "dog-food", "grooming").
    pub category: String,
    /// Long description.
    pub description: Option<String>,
    /// Availability status.
    pub status: ProductStatus,
}

impl Product {
    /// Create a new product snapshot.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: None,
            thumbnail: None,
            category: category.into(),
            description: None,
            status: ProductStatus::Active,
        }
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_availability() {
        let mut product = Product::new(
            ProductId::new("prod-1"),
            "Salmon Kibble 2kg",
            Money::new(89900, Currency::INR),
            "dog-food",
        );
        assert!(product.is_available());

        product.status = ProductStatus::OutOfStock;
        assert!(!product.is_available());
    }

    #[test]
    fn test_product_status_wire_format() {
        let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
        assert_eq!(json, r#""out_of_stock""#);
    }
}
