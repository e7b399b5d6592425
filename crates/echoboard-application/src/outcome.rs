//! Translating backend call results into store dispatches.
//!
//! Network call sites own their failures; this module gives them one way to
//! turn a result into notifications and, for rejected credentials, a logout.

use echoboard_core::store::Action;
use serde_json::Value;
use tracing::info;

use crate::store::Store;

/// Message shown after the backend rejects the session token.
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Message shown when the backend could not be reached and no detail is known.
pub const CONNECTION_FAILED: &str = "Could not connect to backend.";

/// What happened to a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// 2xx response
    Success,
    /// Non-2xx response
    HttpFailure {
        status: u16,
        /// The server's `msg`, if any
        message: Option<String>,
        /// Whether the request carried the session token
        authenticated: bool,
    },
    /// No response at all
    Connection { message: Option<String> },
}

impl ApiOutcome {
    /// Classifies a response from its status code and decoded JSON body.
    ///
    /// `authenticated` tells whether the request was sent with the bearer
    /// token. The server's human-readable text is read from the body's `msg`
    /// field and only kept for failures.
    pub fn from_response(status: u16, body: &Value, authenticated: bool) -> Self {
        if (200..300).contains(&status) {
            return ApiOutcome::Success;
        }

        ApiOutcome::HttpFailure {
            status,
            message: body.get("msg").and_then(message_text),
            authenticated,
        }
    }

    /// True when the backend rejected the token a request carried (401, or
    /// 422 for a malformed token).
    ///
    /// Rejections of anonymous requests, such as bad login credentials, are
    /// plain failures.
    pub fn is_session_rejected(&self) -> bool {
        matches!(
            self,
            ApiOutcome::HttpFailure {
                status: 401 | 422,
                authenticated: true,
                ..
            }
        )
    }

    /// The dispatches this outcome calls for.
    ///
    /// `success` is the caller's confirmation text, if it shows one.
    /// `fallback` is shown for failures the server did not explain.
    pub fn actions(&self, success: Option<&str>, fallback: &str) -> Vec<Action> {
        match self {
            ApiOutcome::Success => success
                .map(|text| Action::Success(Some(text.to_string())))
                .into_iter()
                .collect(),
            _ if self.is_session_rejected() => vec![
                Action::Logout,
                Action::Error(Some(SESSION_EXPIRED.to_string())),
            ],
            ApiOutcome::HttpFailure { message, .. } => vec![Action::Error(Some(
                message.clone().unwrap_or_else(|| fallback.to_string()),
            ))],
            ApiOutcome::Connection { message } => vec![Action::Error(Some(
                message
                    .clone()
                    .unwrap_or_else(|| CONNECTION_FAILED.to_string()),
            ))],
        }
    }

    /// Dispatches [`ApiOutcome::actions`] into `store`, in order.
    pub fn report(&self, store: &Store, success: Option<&str>, fallback: &str) {
        if self.is_session_rejected() {
            info!("Backend rejected the session, logging out");
        }

        for action in self.actions(success, fallback) {
            store.dispatch(action);
        }
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoboard_core::user::UserProfile;
    use serde_json::json;

    fn failure(status: u16, authenticated: bool) -> ApiOutcome {
        ApiOutcome::HttpFailure {
            status,
            message: None,
            authenticated,
        }
    }

    #[test]
    fn test_from_response() {
        assert_eq!(
            ApiOutcome::from_response(201, &json!({"msg": "ok"}), true),
            ApiOutcome::Success
        );
        assert_eq!(
            ApiOutcome::from_response(400, &json!({"msg": "Ingresa un email distinto."}), true),
            ApiOutcome::HttpFailure {
                status: 400,
                message: Some("Ingresa un email distinto.".into()),
                authenticated: true,
            }
        );
        assert_eq!(
            ApiOutcome::from_response(500, &json!({}), false),
            failure(500, false)
        );
    }

    #[test]
    fn test_session_rejection_statuses() {
        for status in [401, 422] {
            assert!(failure(status, true).is_session_rejected());
            assert!(!failure(status, false).is_session_rejected());
        }
        assert!(!failure(403, true).is_session_rejected());
    }

    #[test]
    fn test_actions_use_fallback() {
        assert_eq!(
            failure(500, true).actions(None, "Error fetching projects."),
            vec![Action::Error(Some("Error fetching projects.".into()))]
        );

        let offline = ApiOutcome::Connection { message: None };
        assert_eq!(
            offline.actions(None, "unused"),
            vec![Action::Error(Some(CONNECTION_FAILED.into()))]
        );

        assert!(ApiOutcome::Success.actions(None, "unused").is_empty());
    }

    #[test]
    fn test_rejected_session_logs_out_then_reports() {
        let store = Store::in_memory();
        store.login("T", UserProfile::new(1, "Ana", "ana@echo.dev"));

        ApiOutcome::from_response(401, &json!({"msg": "Token has expired"}), true)
            .report(&store, None, "Error fetching projects.");

        let state = store.state();
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some(SESSION_EXPIRED));
    }

    #[test]
    fn test_failed_login_shows_server_message() {
        let store = Store::in_memory();

        ApiOutcome::from_response(401, &json!({"msg": "Credenciales inválidas"}), false)
            .report(&store, None, "Login failed");

        let state = store.state();
        assert_eq!(state.error.as_deref(), Some("Credenciales inválidas"));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_anonymous_rejection_keeps_existing_session() {
        let store = Store::in_memory();
        store.login("T", UserProfile::new(1, "Ana", "ana@echo.dev"));

        ApiOutcome::from_response(422, &json!({}), false).report(&store, None, "Request rejected");

        let state = store.state();
        assert!(state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Request rejected"));
    }

    #[test]
    fn test_success_reports_caller_text_only() {
        let store = Store::in_memory();

        ApiOutcome::from_response(200, &json!({"msg": "Projects retrieved successfully"}), true)
            .report(&store, None, "Error fetching projects.");
        assert!(store.state().success.is_none());

        ApiOutcome::from_response(200, &json!({"msg": "ok"}), true).report(
            &store,
            Some("User updated successfully!"),
            "Error updating user.",
        );
        assert_eq!(
            store.state().success.as_deref(),
            Some("User updated successfully!")
        );
    }
}
