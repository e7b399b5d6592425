//! The store container.
//!
//! Owns the current [`StoreState`], applies actions through the pure reducer,
//! mirrors the resulting effects into durable storage and broadcasts every
//! committed state to subscribers.

use echoboard_core::error::Result;
use echoboard_core::notification::NotificationKind;
use echoboard_core::project::ProjectCache;
use echoboard_core::storage::DurableStorage;
use echoboard_core::store::{Action, StoreState, WireAction, hydrate, reduce};
use echoboard_core::user::UserProfile;
use echoboard_infrastructure::{FileStorage, MemoryStorage};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Handle to the client store.
///
/// Cloning is cheap and every clone refers to the same state, so the store
/// is handed to collaborators explicitly instead of living in a global.
///
/// Dispatches are serialized: each one reduces, persists and publishes
/// before the next begins. Do not dispatch while holding a borrow from a
/// subscription receiver.
///
/// # Example
///
/// ```ignore
/// let store = Store::open_file(EchoBoardPaths::storage_file()?);
/// store.dispatch(Action::Error(Some("Could not connect to backend.".into())));
/// assert!(store.state().error.is_some());
/// ```
#[derive(Clone)]
pub struct Store {
    state: Arc<watch::Sender<StoreState>>,
    storage: Arc<dyn DurableStorage>,
}

impl Store {
    /// Creates a store hydrated from `storage`.
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        let initial = hydrate(storage.as_ref());
        info!(authenticated = initial.is_authenticated(), "Store initialized");

        let (sender, _receiver) = watch::channel(initial);
        Self {
            state: Arc::new(sender),
            storage,
        }
    }

    /// Creates a store backed by a [`FileStorage`] at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::open(path)))
    }

    /// Creates a store whose durable storage lives only in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver is woken for every dispatch that changed state; ignored
    /// actions do not wake it.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// The durable storage this store mirrors into.
    pub fn storage(&self) -> &Arc<dyn DurableStorage> {
        &self.storage
    }

    /// Applies `action`.
    ///
    /// Storage effects are applied before the new state is published, even
    /// when the state itself is unchanged. Subscribers are only woken when it
    /// changed. A failed storage write is logged; the in-memory transition
    /// still commits.
    pub fn dispatch(&self, action: Action) {
        let action_type = action.type_name();
        let storage = self.storage.as_ref();

        let changed = self.state.send_if_modified(|state| {
            let reduction = reduce(state, action);

            for effect in &reduction.effects {
                if let Err(e) = effect.apply(storage) {
                    error!(
                        action = action_type,
                        key = effect.key().as_str(),
                        error = %e,
                        "Failed to mirror state into durable storage"
                    );
                }
            }

            if !reduction.is_changed() {
                return false;
            }
            *state = reduction.state;
            true
        });

        debug!(action = action_type, changed, "Dispatched action");
    }

    /// Applies a loosely typed action.
    ///
    /// Unknown types and malformed payloads are logged and ignored, leaving
    /// state untouched. Returns whether the action was understood.
    pub fn dispatch_wire(&self, wire: WireAction) -> bool {
        match wire.into_action() {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(e) => {
                warn!(error = %e, "Ignoring action");
                false
            }
        }
    }

    /// Parses `raw` as a JSON action and applies it like [`Store::dispatch_wire`].
    pub fn dispatch_json(&self, raw: &str) -> Result<bool> {
        let wire = WireAction::from_json(raw)?;
        Ok(self.dispatch_wire(wire))
    }

    // ============================================================================
    // Convenience entry points
    // ============================================================================

    pub fn login(&self, token: impl Into<String>, user: UserProfile) {
        self.dispatch(Action::LoginSuccess {
            token: token.into(),
            user,
        });
    }

    pub fn logout(&self) {
        self.dispatch(Action::Logout);
    }

    pub fn update_profile(&self, user: UserProfile) {
        self.dispatch(Action::ProfileChange(user));
    }

    pub fn load_projects(&self, projects: ProjectCache) {
        self.dispatch(Action::ProjectsLoaded(projects));
    }

    /// Drops the cached project listing so the next reader refetches it.
    pub fn invalidate_projects(&self) {
        self.dispatch(Action::ReloadProjects);
    }

    pub fn report_error(&self, text: impl Into<String>) {
        self.dispatch(Action::Error(Some(text.into())));
    }

    pub fn report_success(&self, text: impl Into<String>) {
        self.dispatch(Action::Success(Some(text.into())));
    }

    pub fn dismiss(&self, kind: NotificationKind) {
        self.dispatch(Action::dismiss(kind));
    }

    /// Current bearer token, if a session is active.
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoboard_core::project::Project;
    use echoboard_core::storage::StorageKey;

    fn ana() -> UserProfile {
        UserProfile::new(1, "Ana Ruiz", "ana@echo.dev")
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = Store::in_memory();
        let state = store.state();
        assert_eq!(state, StoreState::new());
        assert_eq!(state.profile_colors.len(), 9);
    }

    #[test]
    fn test_login_persists_token_and_user() {
        let storage = Arc::new(MemoryStorage::new());
        let store = Store::new(storage.clone());

        store.login("T", ana());

        let state = store.state();
        assert_eq!(state.token.as_deref(), Some("T"));
        assert_eq!(state.user.as_deref(), Some(&ana()));
        assert!(state.error.is_none());

        assert_eq!(storage.get("token").unwrap().as_deref(), Some("T"));
        let stored: UserProfile =
            serde_json::from_str(&storage.get("user").unwrap().unwrap()).unwrap();
        assert_eq!(stored, ana());
    }

    #[test]
    fn test_logout_removes_keys_regardless_of_prior_state() {
        let storage = Arc::new(MemoryStorage::with_entries([
            ("token", "stale"),
            ("projects", "{\"admin\":[],\"member\":[]}"),
        ]));
        let store = Store::new(storage.clone());

        store.logout();

        let state = store.state();
        assert!(state.token.is_none());
        assert!(state.user.is_none());
        assert!(state.projects.is_none());
        for key in StorageKey::ALL {
            assert_eq!(storage.get(key.as_str()).unwrap(), None);
        }
    }

    #[test]
    fn test_logout_when_logged_out_cleans_storage_quietly() {
        let storage = Arc::new(MemoryStorage::with_entries([("token", "orphan")]));
        let store = Store::new(storage.clone());
        let receiver = store.subscribe();

        store.logout();
        store.invalidate_projects();
        store.dismiss(NotificationKind::Error);

        assert!(!receiver.has_changed().unwrap());
        assert_eq!(store.state(), StoreState::new());
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[test]
    fn test_unknown_wire_action_is_a_no_op() {
        let store = Store::in_memory();
        store.login("T", ana());
        let before = store.state();

        let applied = store.dispatch_wire(WireAction::new("bogus", None));

        assert!(!applied);
        let after = store.state();
        assert_eq!(before, after);
        assert!(Arc::ptr_eq(
            before.user.as_ref().unwrap(),
            after.user.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_dispatch_json() {
        let store = Store::in_memory();
        assert!(store.dispatch_json(r#"{"type":"error","payload":"X"}"#).unwrap());
        assert_eq!(store.state().error.as_deref(), Some("X"));

        assert!(store.dispatch_json(r#"{"type":"error","payload":null}"#).unwrap());
        assert!(store.state().error.is_none());

        assert!(store.dispatch_json("not json").is_err());
    }

    #[test]
    fn test_projects_then_invalidate() {
        let storage = Arc::new(MemoryStorage::new());
        let store = Store::new(storage.clone());
        store.login("T", ana());

        store.load_projects(ProjectCache::new(
            vec![Project::new(1, "Launch")],
            Vec::new(),
        ));
        assert!(storage.get("projects").unwrap().is_some());

        store.invalidate_projects();
        assert!(store.state().projects.is_none());
        assert_eq!(storage.get("projects").unwrap(), None);
    }

    #[test]
    fn test_reopen_restores_session_but_not_banners() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let store = Store::new(storage.clone());
            store.login("T", ana());
            store.report_error("boom");
            store.report_success("saved");
        }

        let reopened = Store::new(storage);
        let state = reopened.state();
        assert!(state.is_authenticated());
        assert!(state.error.is_none());
        assert!(state.success.is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::in_memory();
        let handle = store.clone();

        handle.report_success("Task Created");
        assert_eq!(store.state().success.as_deref(), Some("Task Created"));

        store.dismiss(NotificationKind::Success);
        assert!(handle.state().success.is_none());
    }
}
