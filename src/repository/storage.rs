//! Key/value storage media for the local lead store.
//!
//! A medium behaves like browser local storage: string values under string
//! keys, where a missing key is not an error.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub trait StorageMedium: Send + Sync {
    fn get_item(&self, key: &str) -> RepositoryResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> RepositoryResult<()>;
}

/// Page-scoped medium living for as long as the value itself.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryStorage {
    fn get_item(&self, key: &str) -> RepositoryResult<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|e| RepositoryError::Unexpected(format!("Storage lock poisoned: {e}")))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| RepositoryError::Unexpected(format!("Storage lock poisoned: {e}")))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Medium persisting each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens the directory, creating it when missing.
    pub fn new(dir: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageMedium for FileStorage {
    fn get_item(&self, key: &str) -> RepositoryResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> RepositoryResult<()> {
        // Readers see either the old or the new file, never a partial write.
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_values() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("leads_data").unwrap(), None);

        storage.set_item("leads_data", "[]").unwrap();

        assert_eq!(storage.get_item("leads_data").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_treats_missing_file_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested")).unwrap();

        assert_eq!(storage.get_item("leads_data").unwrap(), None);
        assert!(storage.dir().exists());
    }

    #[test]
    fn file_storage_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.set_item("leads_data", "[1]").unwrap();
        storage.set_item("leads_data", "[]").unwrap();

        assert_eq!(storage.get_item("leads_data").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("leads_data.json").exists());
        assert!(!dir.path().join(".leads_data.json.tmp").exists());
    }
}
