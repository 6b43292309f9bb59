//! Type-safe key-value storage layer for PawMart.
//!
//! Holds the locally cached cart snapshot, the stored user identity, and
//! the push device token, with automatic JSON serialization. Backed by
//! Spin's Key-Value store on wasm32 and an in-memory map elsewhere.

mod error;
pub mod identity;
pub mod keys;
mod store;

pub use error::CacheError;
pub use identity::StoredIdentity;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, CacheError, Store, StoredIdentity};
}
