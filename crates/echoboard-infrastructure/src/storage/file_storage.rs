//! File-backed durable storage.

use echoboard_core::error::{EchoBoardError, Result};
use echoboard_core::storage::DurableStorage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

use super::atomic_json::AtomicJsonFile;

type Entries = BTreeMap<String, String>;

/// Durable storage kept in a single JSON object file.
///
/// Entries are cached in memory; every `set`/`remove` rewrites the file
/// atomically before the cache is updated, so the cache never runs ahead of
/// what is on disk.
///
/// # Example
///
/// ```ignore
/// use echoboard_infrastructure::FileStorage;
///
/// let storage = FileStorage::open(EchoBoardPaths::storage_file()?);
/// storage.set("token", "abc")?;
/// ```
pub struct FileStorage {
    file: AtomicJsonFile<Entries>,
    entries: RwLock<Entries>,
}

impl FileStorage {
    /// Opens the storage file at `path`.
    ///
    /// A missing file starts empty. A corrupt file also starts empty and is
    /// overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = AtomicJsonFile::new(path.into());

        let entries = match file.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => Entries::new(),
            Err(e) => {
                warn!(
                    path = %file.path().display(),
                    error = %e,
                    "Durable storage file is unreadable, starting empty"
                );
                Entries::new()
            }
        };

        debug!(path = %file.path().display(), entries = entries.len(), "Opened durable storage");

        Self {
            file,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn update<F>(&self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries),
    {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| EchoBoardError::internal(format!("Storage lock poisoned: {}", e)))?;

        let mut next = entries.clone();
        f(&mut next);

        self.file
            .save(&next)
            .map_err(|e| EchoBoardError::storage(key, e.to_string()))?;

        *entries = next;
        Ok(())
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| EchoBoardError::internal(format!("Storage lock poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(key, |entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path().join("storage.json"));

        assert_eq!(storage.get("token").unwrap(), None);

        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));

        storage.remove("token").unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path().join("storage.json"));
        assert!(storage.remove("projects").is_ok());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{\"token\": ").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("token").unwrap(), None);

        storage.set("token", "fresh").unwrap();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("fresh"));
    }
}
