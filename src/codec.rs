use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::KeyValueStore;

/// Fail-soft JSON codec over one key-value store. A corrupted or unreadable
/// slot degrades to the caller's default instead of failing the page; a
/// failed save is logged and dropped, leaving the in-memory state ahead of
/// what was persisted.
#[derive(Clone)]
pub struct StoreCodec {
    store: Arc<dyn KeyValueStore>,
}

impl StoreCodec {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                tracing::warn!(key, error = %err, "store read failed, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "stored document is corrupt, using default");
                default
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(key, error = %err, "serialize failed, slot left unchanged");
                return;
            }
        };

        if let Err(err) = self.store.set(key, &raw) {
            tracing::error!(key, error = %err, "store write failed, slot left unchanged");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            tracing::error!(key, error = %err, "store remove failed");
        }
    }
}
