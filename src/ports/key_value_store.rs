//! Key-value storage backend port.
//!
//! The persistence store keeps each collection as one JSON document under a
//! named key. Backends only move strings; (de)serialization happens above.

/// Errors raised by storage backends and the stores built on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error on '{key}': {message}")]
    Io { key: String, message: String },

    #[error("corrupt payload under '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error("failed to serialize '{key}': {reason}")]
    Serialization { key: String, reason: String },
}

impl StorageError {
    pub fn io(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Serialization {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// The key the failing operation touched.
    pub fn key(&self) -> &str {
        match self {
            StorageError::Io { key, .. }
            | StorageError::Corrupt { key, .. }
            | StorageError::Serialization { key, .. } => key,
        }
    }
}

/// Synchronous get/set over named keys.
///
/// A key that was never written reads as `None`. Writes replace the whole
/// value and are complete when `set` returns.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a key; removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
