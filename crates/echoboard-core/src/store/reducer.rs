//! The reducer: the only way store state changes.
//!
//! [`reduce`] is pure. Durable storage writes are returned as
//! [`StorageEffect`]s for the store shell to apply.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::action::Action;
use super::effect::StorageEffect;
use super::state::StoreState;
use crate::notification::normalize_text;
use crate::storage::StorageKey;

/// Result of reducing one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// Next state
    pub state: StoreState,
    /// Storage writes to mirror, in order
    pub effects: Vec<StorageEffect>,
    changed: bool,
}

impl Reduction {
    fn unchanged(state: &StoreState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            changed: false,
        }
    }

    fn transition(previous: &StoreState, state: StoreState, effects: Vec<StorageEffect>) -> Self {
        let changed = state != *previous;
        Self {
            state,
            effects,
            changed,
        }
    }

    /// False when `state` equals the input.
    ///
    /// An unchanged reduction may still carry effects, e.g. a logout from an
    /// empty state still clears leftover storage keys.
    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

/// Computes the next state for `action`.
///
/// Never fails. Fields an action does not touch are carried over, sharing
/// the same `Arc` allocations as `state`.
pub fn reduce(state: &StoreState, action: Action) -> Reduction {
    debug!(action = action.type_name(), "Reducing action");

    match action {
        Action::LoginSuccess { token, user } => {
            let mut effects = vec![StorageEffect::Persist {
                key: StorageKey::Token,
                value: token.clone(),
            }];
            effects.extend(persist_json(StorageKey::User, &user));

            Reduction::transition(
                state,
                StoreState {
                    token: Some(token),
                    user: Some(Arc::new(user)),
                    error: None,
                    ..state.clone()
                },
                effects,
            )
        }

        Action::Logout => Reduction::transition(
            state,
            StoreState {
                token: None,
                user: None,
                projects: None,
                error: None,
                ..state.clone()
            },
            StorageKey::ALL.iter().copied().map(StorageEffect::Remove).collect(),
        ),

        Action::ProfileChange(user) => {
            if state.token.is_none() {
                warn!(
                    user_id = user.id,
                    "Ignoring profile change without an active session"
                );
                return Reduction::unchanged(state);
            }

            let effects = persist_json(StorageKey::User, &user).into_iter().collect();
            Reduction::transition(
                state,
                StoreState {
                    user: Some(Arc::new(user)),
                    error: None,
                    ..state.clone()
                },
                effects,
            )
        }

        Action::ProjectsLoaded(cache) => {
            if !cache.is_disjoint() {
                warn!("Project listing has projects in both admin and member partitions");
            }

            let effects = persist_json(StorageKey::Projects, &cache)
                .into_iter()
                .collect();
            Reduction::transition(
                state,
                StoreState {
                    projects: Some(Arc::new(cache)),
                    error: None,
                    ..state.clone()
                },
                effects,
            )
        }

        Action::ReloadProjects => Reduction::transition(
            state,
            StoreState {
                projects: None,
                ..state.clone()
            },
            vec![StorageEffect::Remove(StorageKey::Projects)],
        ),

        Action::Error(text) => Reduction::transition(
            state,
            StoreState {
                error: normalize_text(text),
                ..state.clone()
            },
            Vec::new(),
        ),

        Action::Success(text) => Reduction::transition(
            state,
            StoreState {
                success: normalize_text(text),
                ..state.clone()
            },
            Vec::new(),
        ),
    }
}

fn persist_json<T: Serialize>(key: StorageKey, value: &T) -> Option<StorageEffect> {
    match serde_json::to_string(value) {
        Ok(value) => Some(StorageEffect::Persist { key, value }),
        Err(e) => {
            error!(key = key.as_str(), error = %e, "Failed to serialize entry for storage");
            None
        }
    }
}
