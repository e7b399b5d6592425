//! Notification kinds for the error/success banners.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EchoBoardError;

/// Which banner a message belongs to.
///
/// Each kind holds at most one live message; a new one replaces the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Error,
    Success,
}

impl NotificationKind {
    /// Wire name, identical to the action type that sets this banner.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = EchoBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(NotificationKind::Error),
            "success" => Ok(NotificationKind::Success),
            other => Err(EchoBoardError::invalid_action(
                other,
                "expected 'error' or 'success'",
            )),
        }
    }
}

/// Normalizes a banner payload: empty text clears the banner just like null.
pub fn normalize_text(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
