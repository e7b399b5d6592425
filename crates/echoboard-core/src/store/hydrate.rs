//! Rebuilding the initial state from durable storage.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use super::state::StoreState;
use crate::storage::{DurableStorage, StorageKey};

/// Reads the persisted session and project cache.
///
/// Every entry is optional and read independently. Unreadable or corrupt
/// entries are logged and treated as absent, so startup never fails here.
/// Banners always start cleared.
pub fn hydrate(storage: &dyn DurableStorage) -> StoreState {
    let token = read_raw(storage, StorageKey::Token).filter(|token| !token.is_empty());
    let user = read_json(storage, StorageKey::User).map(Arc::new);
    let projects = read_json(storage, StorageKey::Projects).map(Arc::new);

    // A half session is not a session.
    let (token, user) = match (token, user) {
        (Some(token), Some(user)) => (Some(token), Some(user)),
        (None, None) => (None, None),
        (token, user) => {
            warn!(
                has_token = token.is_some(),
                has_user = user.is_some(),
                "Discarding incomplete persisted session"
            );
            (None, None)
        }
    };

    debug!(
        authenticated = token.is_some(),
        has_projects = projects.is_some(),
        "Hydrated store state"
    );

    StoreState {
        token,
        user,
        projects,
        ..StoreState::default()
    }
}

fn read_raw(storage: &dyn DurableStorage, key: StorageKey) -> Option<String> {
    match storage.get(key.as_str()) {
        Ok(value) => value,
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "Failed to read persisted entry");
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(storage: &dyn DurableStorage, key: StorageKey) -> Option<T> {
    let raw = read_raw(storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "Ignoring corrupt persisted entry");
            None
        }
    }
}
