//! Durable storage effects emitted by the reducer.

use crate::error::Result;
use crate::storage::{DurableStorage, StorageKey};

/// A write the store shell must mirror into durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageEffect {
    /// Store `value` under `key`
    Persist { key: StorageKey, value: String },
    /// Delete `key`
    Remove(StorageKey),
}

impl StorageEffect {
    pub fn key(&self) -> StorageKey {
        match self {
            StorageEffect::Persist { key, .. } => *key,
            StorageEffect::Remove(key) => *key,
        }
    }

    /// Performs this effect against `storage`.
    pub fn apply(&self, storage: &dyn DurableStorage) -> Result<()> {
        match self {
            StorageEffect::Persist { key, value } => storage.set(key.as_str(), value),
            StorageEffect::Remove(key) => storage.remove(key.as_str()),
        }
    }
}
