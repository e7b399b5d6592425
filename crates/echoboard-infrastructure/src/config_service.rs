//! Configuration service implementation.
//!
//! Loads the client configuration from `config.toml` and caches it.

use crate::paths::EchoBoardPaths;
use echoboard_core::config::EchoBoardConfig;
use echoboard_core::error::{EchoBoardError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Configuration service that loads and caches [`EchoBoardConfig`].
///
/// A missing or unreadable file yields the default configuration; the
/// client must still start.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<EchoBoardConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default `config.toml`.
    ///
    /// The file is read lazily on first access.
    pub fn new() -> Self {
        Self {
            path: EchoBoardPaths::config_file().ok(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path` instead of the default location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> EchoBoardConfig {
        if let Ok(read_lock) = self.config.read() {
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.path.as_deref() {
            Some(path) => Self::load_config(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Falling back to default configuration");
                EchoBoardConfig::default()
            }),
            None => EchoBoardConfig::default(),
        };

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Durable storage file: the configured override or the platform default.
    pub fn storage_path(&self) -> Result<PathBuf> {
        match self.get_config().storage_path {
            Some(path) => Ok(path),
            None => EchoBoardPaths::storage_file().map_err(|e| EchoBoardError::config(e.to_string())),
        }
    }

    fn load_config(path: &Path) -> Result<EchoBoardConfig> {
        if !path.exists() {
            return Ok(EchoBoardConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config(), EchoBoardConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "log_level = [").unwrap();

        let service = ConfigService::with_path(path);
        assert_eq!(service.get_config().log_level, "info");
    }

    #[test]
    fn test_storage_path_override_and_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "storage_path = \"/tmp/echo.json\"\n").unwrap();

        let service = ConfigService::with_path(&path);
        assert_eq!(service.storage_path().unwrap(), PathBuf::from("/tmp/echo.json"));

        // Cached until invalidated
        std::fs::write(&path, "log_level = \"trace\"\n").unwrap();
        assert_eq!(service.get_config().log_level, "info");

        service.invalidate_cache();
        let reloaded = service.get_config();
        assert_eq!(reloaded.log_level, "trace");
        assert!(reloaded.storage_path.is_none());
    }
}
