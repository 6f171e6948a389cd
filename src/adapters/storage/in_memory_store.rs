//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a map behind a lock. Useful for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{KeyValueStore, StorageError};

/// In-memory storage backend
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values (useful for tests)
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(key: &str) -> StorageError {
    StorageError::io(key, "store lock poisoned")
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| poisoned(key))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| poisoned(key))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_reads_as_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("forms").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_replaces_value() {
        let store = InMemoryKeyValueStore::new();
        store.set("forms", "[]").unwrap();
        store.set("forms", "[1]").unwrap();

        assert_eq!(store.get("forms").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let store = InMemoryKeyValueStore::with_entries([("forms", "[]")]);
        store.remove("forms").unwrap();
        store.remove("forms").unwrap();
        assert_eq!(store.get("forms").unwrap(), None);
    }

    #[test]
    fn clones_share_state() {
        let store = InMemoryKeyValueStore::new();
        let clone = store.clone();
        store.set("responses", "[]").unwrap();
        assert_eq!(clone.get("responses").unwrap().as_deref(), Some("[]"));
    }
}
