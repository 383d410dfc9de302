//! Whole-collection load/save over a [`KeyValueStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::key_value::KeyValueStore;

/// Keys used in the store.
pub mod keys {
    /// All certifications (JSON array).
    pub const CERTIFICATIONS: &str = "certs";
    /// All registered users (JSON array).
    pub const ALL_USERS: &str = "allUsers";
    /// The most recently registered user (JSON object).
    pub const CURRENT_USER: &str = "user";
    /// Role of the logged-in session (plain string).
    pub const USER_ROLE: &str = "userRole";
    /// Email of the logged-in session (plain string).
    pub const USER_EMAIL: &str = "userEmail";
}

/// JSON codec on top of a raw key-value store.
#[derive(Debug)]
pub struct CollectionStore<S> {
    store: S,
}

impl<S> CollectionStore<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the collection under `key`.
    ///
    /// Missing, `null` or malformed data all load as an empty collection.
    pub fn load_all<T>(&self, key: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        self.load_one::<Option<Vec<T>>>(key)
            .flatten()
            .unwrap_or_default()
    }

    /// Load the collection under `key` ahead of rewriting it.
    ///
    /// Missing or `null` data is still an empty collection, but a store or
    /// decode failure is an error so the caller never overwrites records it
    /// could not read.
    pub fn try_load_all<T>(&self, key: &str) -> Result<Vec<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };
        let items: Option<Vec<T>> = serde_json::from_str(&raw)?;
        Ok(items.unwrap_or_default())
    }

    /// Replace the collection under `key`.
    pub fn save_all<T>(&self, key: &str, items: &[T]) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        self.save_one(key, &items)
    }

    /// Load a single JSON value; `None` when missing or unreadable.
    pub fn load_one<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let raw = self.load_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed stored value");
                None
            }
        }
    }

    pub fn save_one<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(value)?;
        self.store.set(key, &payload)
    }

    /// Raw string value; `None` when missing or the store cannot be read.
    pub fn load_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read from store; treating as missing");
                None
            }
        }
    }

    pub fn save_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.set(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }
}
