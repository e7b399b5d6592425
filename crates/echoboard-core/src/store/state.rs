//! Store state snapshot.

use serde::Serialize;
use std::sync::Arc;

use crate::notification::NotificationKind;
use crate::palette::{self, PROFILE_COLORS};
use crate::project::ProjectCache;
use crate::user::UserProfile;

/// The complete client state at one point in time.
///
/// `user` and `projects` sit behind `Arc` so snapshots are cheap to clone and
/// a transition that does not touch them keeps the same allocation. Readers
/// memoizing on identity can use [`Arc::ptr_eq`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreState {
    /// Bearer credential of the active session
    pub token: Option<String>,
    /// Profile of the active session
    pub user: Option<Arc<UserProfile>>,
    /// Cached project listing; `None` means not fetched yet
    pub projects: Option<Arc<ProjectCache>>,
    /// Live error banner text
    pub error: Option<String>,
    /// Live success banner text
    pub success: Option<String>,
    /// Static palette used to render profile colors
    pub profile_colors: &'static [&'static str],
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            projects: None,
            error: None,
            success: None,
            profile_colors: &PROFILE_COLORS,
        }
    }
}

impl StoreState {
    /// Creates an empty, logged-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when both halves of the session are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Returns the live message for a banner, if any.
    pub fn notification(&self, kind: NotificationKind) -> Option<&str> {
        match kind {
            NotificationKind::Error => self.error.as_deref(),
            NotificationKind::Success => self.success.as_deref(),
        }
    }

    /// Display color of the current user, or the fallback when logged out.
    pub fn profile_color(&self) -> &'static str {
        self.user
            .as_ref()
            .map(|user| user.display_color())
            .unwrap_or(palette::FALLBACK_COLOR)
    }
}
