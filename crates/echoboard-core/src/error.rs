//! Error types for the EchoBoard client store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every EchoBoard crate.
///
/// The reducer itself never produces one of these; they come from storage
/// backends, configuration loading and wire-level action parsing.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum EchoBoardError {
    /// Durable storage could not read or write an entry
    #[error("Storage error on '{key}': {message}")]
    Storage { key: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A wire-level action could not be turned into a typed action
    #[error("Invalid action '{action_type}': {message}")]
    InvalidAction {
        action_type: String,
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EchoBoardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Storage error for the given key
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidAction error
    pub fn invalid_action(action_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAction {
            action_type: action_type.into(),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an invalid action error
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Self::InvalidAction { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for EchoBoardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for EchoBoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for EchoBoardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, EchoBoardError>`.
pub type Result<T> = std::result::Result<T, EchoBoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts_to_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: EchoBoardError = err.into();
        assert!(converted.is_serialization());
        assert!(converted.to_string().contains("JSON"));
    }

    #[test]
    fn test_storage_error_mentions_key() {
        let err = EchoBoardError::storage("token", "disk full");
        assert!(err.is_storage());
        assert_eq!(err.to_string(), "Storage error on 'token': disk full");
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: EchoBoardError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }
}
