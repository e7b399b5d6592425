//! Action vocabulary.
//!
//! [`Action`] is the closed, typed set of transitions. [`WireAction`] is the
//! string-typed `{"type": ..., "payload": ...}` form collaborators may send;
//! it is parsed at the edge and unknown types never reach the reducer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EchoBoardError, Result};
use crate::notification::{NotificationKind, normalize_text};
use crate::project::ProjectCache;
use crate::user::UserProfile;

pub const LOGIN_SUCCESS: &str = "LOGIN_SUCCESS";
pub const LOGOUT: &str = "LOGOUT";
pub const PROFILE_CHANGE: &str = "profile_change";
pub const PROJECTS: &str = "projects";
pub const RELOAD_PROJECTS: &str = "reload/delete projects";
pub const ERROR: &str = "error";
pub const SUCCESS: &str = "success";

/// A state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Login or registration callback succeeded
    LoginSuccess { token: String, user: UserProfile },
    /// Session ended by the user or rejected by the backend
    Logout,
    /// Profile was edited
    ProfileChange(UserProfile),
    /// A project listing was fetched
    ProjectsLoaded(ProjectCache),
    /// Discard the cached listing so the next reader refetches
    ReloadProjects,
    /// Set (`Some`) or clear (`None`) the error banner
    Error(Option<String>),
    /// Set (`Some`) or clear (`None`) the success banner
    Success(Option<String>),
}

impl Action {
    /// Builds the action that sets or clears a banner.
    pub fn notify(kind: NotificationKind, text: Option<String>) -> Self {
        match kind {
            NotificationKind::Error => Action::Error(text),
            NotificationKind::Success => Action::Success(text),
        }
    }

    /// Builds the action that dismisses a banner.
    pub fn dismiss(kind: NotificationKind) -> Self {
        Self::notify(kind, None)
    }

    /// Wire name of this action.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::LoginSuccess { .. } => LOGIN_SUCCESS,
            Action::Logout => LOGOUT,
            Action::ProfileChange(_) => PROFILE_CHANGE,
            Action::ProjectsLoaded(_) => PROJECTS,
            Action::ReloadProjects => RELOAD_PROJECTS,
            Action::Error(_) => ERROR,
            Action::Success(_) => SUCCESS,
        }
    }

    /// Converts to the string-typed wire form.
    pub fn to_wire(&self) -> Result<WireAction> {
        let payload = match self {
            Action::LoginSuccess { token, user } => Some(serde_json::to_value(LoginPayload {
                token: token.clone(),
                user: user.clone(),
            })?),
            Action::Logout | Action::ReloadProjects => None,
            Action::ProfileChange(user) => Some(serde_json::to_value(user)?),
            Action::ProjectsLoaded(cache) => Some(serde_json::to_value(cache)?),
            Action::Error(text) | Action::Success(text) => {
                Some(text.clone().map(Value::String).unwrap_or(Value::Null))
            }
        };

        Ok(WireAction {
            action_type: self.type_name().to_string(),
            payload,
        })
    }
}

/// Payload of `LOGIN_SUCCESS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: UserProfile,
}

/// An action as it travels between loosely typed collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl WireAction {
    pub fn new(action_type: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }

    /// Parses a JSON action object.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Converts to a typed action.
    ///
    /// Fails with [`EchoBoardError::InvalidAction`] for unknown types and for
    /// payloads that do not match the type.
    pub fn into_action(self) -> Result<Action> {
        let WireAction {
            action_type,
            payload,
        } = self;
        let payload = payload.unwrap_or(Value::Null);

        match action_type.as_str() {
            LOGIN_SUCCESS => {
                let login: LoginPayload = decode(&action_type, payload)?;
                Ok(Action::LoginSuccess {
                    token: login.token,
                    user: login.user,
                })
            }
            LOGOUT => Ok(Action::Logout),
            PROFILE_CHANGE => Ok(Action::ProfileChange(decode(&action_type, payload)?)),
            PROJECTS => Ok(Action::ProjectsLoaded(decode(&action_type, payload)?)),
            RELOAD_PROJECTS => Ok(Action::ReloadProjects),
            ERROR => Ok(Action::Error(banner_text(payload))),
            SUCCESS => Ok(Action::Success(banner_text(payload))),
            _ => Err(EchoBoardError::invalid_action(
                action_type,
                "unknown action type",
            )),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(action_type: &str, payload: Value) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| EchoBoardError::invalid_action(action_type, e.to_string()))
}

/// Banner payloads are loose: falsy values clear, non-strings are shown as JSON.
fn banner_text(payload: Value) -> Option<String> {
    match payload {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(text) => normalize_text(Some(text)),
        other => Some(other.to_string()),
    }
}
