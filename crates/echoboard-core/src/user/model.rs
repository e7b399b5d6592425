//! UserProfile domain model.
//!
//! Snapshot of the authenticated user as returned by the backend's login and
//! profile endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::palette;

/// User profile snapshot.
///
/// Fields the store does not interpret are kept in `extra`, so a profile
/// persisted to durable storage reads back exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user identifier
    pub id: i64,
    /// Display name
    pub full_name: String,
    /// Login email
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Index into the profile color palette, assigned at registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_profile_color: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Backend fields not modeled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Creates a profile with only the required fields set.
    pub fn new(id: i64, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            phone: None,
            country: None,
            profile_picture_url: None,
            random_profile_color: None,
            is_active: None,
            created_at: None,
            extra: Map::new(),
        }
    }

    /// Sets the palette index.
    pub fn with_color(mut self, index: i64) -> Self {
        self.random_profile_color = Some(index);
        self
    }

    /// Returns the display color for this user.
    ///
    /// Falls back to [`palette::FALLBACK_COLOR`] when the index is missing or
    /// outside the palette.
    pub fn display_color(&self) -> &'static str {
        palette::color_for(self.random_profile_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"id":7,"full_name":"Ana","email":"ana@echo.dev","team":"core"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.extra.get("team"), Some(&Value::from("core")));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["team"], "core");
        assert!(back.get("phone").is_none());
    }

    #[test]
    fn test_display_color() {
        let user = UserProfile::new(1, "Ana", "ana@echo.dev").with_color(7);
        assert_eq!(user.display_color(), "blue");

        let uncolored = UserProfile::new(2, "Bo", "bo@echo.dev");
        assert_eq!(uncolored.display_color(), "green");
    }
}
