//! # PawMart SDK
//!
//! Everything the PawMart storefront needs in one import: the commerce
//! domain model, client-side state managers, the typed REST service layer,
//! local caching, and push registration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paw_sdk::prelude::*;
//!
//! let config = StorefrontConfig::from_toml_str(raw_config)?;
//! let client = ApiClient::from_config(&config);
//! let store = Store::open_default()?;
//! let identity = StoredIdentity::load_or_create(&store)?;
//!
//! let orders = OrderService::new(client.clone(), identity.session_id.clone());
//! let mut cart = CartManager::new(orders, store.clone(), identity.session_id, config.currency());
//!
//! let catalog = ProductService::new(client.clone(), config.currency());
//! for product in catalog.by_category("dog-food")? {
//!     cart.add_item(&product, ItemDetails::none())?;
//! }
//! ```
//!
//! ## Crates
//!
//! - [`paw_commerce`]: cart, order, money, and catalog types
//! - [`paw_state`]: cart/favorites managers and the payment retry flow
//! - [`paw_data`]: HTTP client and typed REST services
//! - [`paw_cache`]: key-value store and stored identity
//! - [`paw_notify`]: push token lifecycle

pub mod prelude;

pub use paw_cache;
pub use paw_commerce;
pub use paw_data;
pub use paw_notify;
pub use paw_state;
