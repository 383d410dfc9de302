//! `window.localStorage` backend (wasm32 only).

use crate::error::StorageError;
use crate::key_value::KeyValueStore;

/// The browser's local storage for the current origin.
#[derive(Debug, Clone)]
pub struct BrowserLocalStorage {
    storage: web_sys::Storage,
}

impl BrowserLocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Backend("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| StorageError::Backend("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("getItem({key}) failed: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("setItem({key}) failed: {e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("removeItem({key}) failed: {e:?}")))
    }
}
