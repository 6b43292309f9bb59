//! Commerce domain types and logic for PawMart.
//!
//! This crate provides the storefront's domain model:
//!
//! - **Catalog**: product snapshots as served by the catalog API
//! - **Cart**: line items keyed by product + variant details, with
//!   recomputed totals
//! - **Orders**: the persistence record and payment status machine
//! - **Favorites**: derived favorite records and local membership
//! - **Money**: smallest-unit integer money with checked arithmetic

pub mod address;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod ids;
pub mod money;
pub mod order;
pub mod shipping;
pub mod taxes;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::address::Address;
    pub use crate::cart::{Cart, ItemDetails, LineItem, LineKey, MAX_QUANTITY_PER_ITEM};
    pub use crate::catalog::{Product, ProductStatus};
    pub use crate::error::CommerceError;
    pub use crate::favorites::{FavoriteList, FavoriteProduct};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::order::{Order, OrderDraft, PaymentStatus};
    pub use crate::shipping::{ShippingMethod, ShippingSelection};
    pub use crate::taxes::Taxes;
}
