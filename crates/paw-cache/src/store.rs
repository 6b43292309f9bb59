//! Key-value store wrapper with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, Mutex};

/// Type-safe key-value store.
///
/// Values are JSON-serialized. On wasm32 this is backed by Spin's Key-Value
/// store; elsewhere by a shared in-memory map, which keeps the state layer
/// fully testable off-target. Cloning yields a handle to the same
/// underlying store.
#[derive(Clone)]
pub struct Store {
    #[cfg(target_arch = "wasm32")]
    name: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl Store {
    /// Open the default store.
    pub fn open_default() -> Result<Self, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            // Probe once so a misconfigured store fails at open, not first use.
            spin_sdk::key_value::Store::open_default()
                .map_err(|e| CacheError::OpenError(e.to_string()))?;
            Ok(Self { name: None })
        }
        #[cfg(not(target_arch = "wasm32"))]
        Ok(Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Open a named store.
    pub fn open(name: &str) -> Result<Self, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            spin_sdk::key_value::Store::open(name)
                .map_err(|e| CacheError::OpenError(e.to_string()))?;
            Ok(Self {
                name: Some(name.to_string()),
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            Self::open_default()
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn backing(&self) -> Result<spin_sdk::key_value::Store, CacheError> {
        match &self.name {
            Some(name) => spin_sdk::key_value::Store::open(name),
            None => spin_sdk::key_value::Store::open_default(),
        }
        .map_err(|e| CacheError::OpenError(e.to_string()))
    }

    /// Get a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            match self.backing()?.get(key) {
                Ok(Some(bytes)) => Ok(Some(serde_json::from_slice(&bytes)?)),
                Ok(None) => Ok(None),
                Err(e) => Err(CacheError::StoreError(e.to_string())),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let entries = self
                .entries
                .lock()
                .map_err(|e| CacheError::StoreError(e.to_string()))?;
            match entries.get(key) {
                Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
                None => Ok(None),
            }
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        #[cfg(target_arch = "wasm32")]
        {
            self.backing()?
                .set(key, &bytes)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut entries = self
                .entries
                .lock()
                .map_err(|e| CacheError::StoreError(e.to_string()))?;
            entries.insert(key.to_string(), bytes);
            Ok(())
        }
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.backing()?
                .delete(key)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut entries = self
                .entries
                .lock()
                .map_err(|e| CacheError::StoreError(e.to_string()))?;
            entries.remove(key);
            Ok(())
        }
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.backing()?
                .exists(key)
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let entries = self
                .entries
                .lock()
                .map_err(|e| CacheError::StoreError(e.to_string()))?;
            Ok(entries.contains_key(key))
        }
    }

    /// Get all keys.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.backing()?
                .get_keys()
                .map_err(|e| CacheError::StoreError(e.to_string()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let entries = self
                .entries
                .lock()
                .map_err(|e| CacheError::StoreError(e.to_string()))?;
            Ok(entries.keys().cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Snapshot {
        value: i32,
    }

    #[test]
    fn test_set_get_roundtrip() {
        let store = Store::open_default().unwrap();
        store.set("k", &Snapshot { value: 7 }).unwrap();
        let got: Option<Snapshot> = store.get("k").unwrap();
        assert_eq!(got, Some(Snapshot { value: 7 }));
    }

    #[test]
    fn test_get_missing() {
        let store = Store::open_default().unwrap();
        let got: Option<Snapshot> = store.get("missing").unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_delete_and_exists() {
        let store = Store::open_default().unwrap();
        store.set("k", &Snapshot { value: 1 }).unwrap();
        assert!(store.exists("k").unwrap());

        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_clone_shares_backing() {
        let store = Store::open_default().unwrap();
        let handle = store.clone();
        store.set("shared", &Snapshot { value: 3 }).unwrap();

        let got: Option<Snapshot> = handle.get("shared").unwrap();
        assert_eq!(got, Some(Snapshot { value: 3 }));
    }
}
