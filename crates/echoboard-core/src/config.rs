//! Client configuration model.
//!
//! Loaded from `config.toml` by the infrastructure `ConfigService`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for an EchoBoard client.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EchoBoardConfig {
    /// Overrides the default durable storage file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,

    /// Default tracing filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EchoBoardConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: EchoBoardConfig = toml::from_str("").unwrap();
        assert_eq!(config, EchoBoardConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let config: EchoBoardConfig = toml::from_str(
            r#"
storage_path = "/tmp/echo/storage.json"
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(
            config.storage_path,
            Some(PathBuf::from("/tmp/echo/storage.json"))
        );
        assert_eq!(config.log_level, "debug");
    }
}
