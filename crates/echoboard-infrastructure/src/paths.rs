//! Path management for EchoBoard client files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/echoboard/         # Config directory (platform specific)
//! ├── config.toml              # Client configuration
//! └── storage.json             # Durable store entries (token, user, projects)
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "echoboard";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves the locations of EchoBoard files.
pub struct EchoBoardPaths;

impl EchoBoardPaths {
    /// Returns the EchoBoard configuration directory (e.g. `~/.config/echoboard/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default durable storage file.
    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("storage.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = EchoBoardPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("echoboard"));
    }

    #[test]
    fn test_files_live_under_config_dir() {
        let config_dir = EchoBoardPaths::config_dir().unwrap();

        let config_file = EchoBoardPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(&config_dir));

        let storage_file = EchoBoardPaths::storage_file().unwrap();
        assert!(storage_file.ends_with("storage.json"));
        assert!(storage_file.starts_with(&config_dir));
    }
}
