//! Durable storage contract.
//!
//! Storage is a flat map of string keys to string values that survives
//! process restarts. The store is its only writer.

use std::fmt;

use crate::error::Result;

/// The keys the store mirrors into durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Bearer token, stored as the raw string
    Token,
    /// Serialized user profile (JSON)
    User,
    /// Serialized project cache (JSON)
    Projects,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::Token, StorageKey::User, StorageKey::Projects];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Token => "token",
            StorageKey::User => "user",
            StorageKey::Projects => "projects",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persistent string key/value store.
///
/// A missing key means "not yet known" and is reported as `Ok(None)`.
/// Implementations use interior mutability so one handle can be shared.
pub trait DurableStorage: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
