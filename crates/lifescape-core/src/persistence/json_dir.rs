//! One JSON file per slot inside a data directory.
//!
//! # Atomic Write Strategy
//!
//! 1. Write to `{key}.json.tmp`
//! 2. Rename to `{key}.json`
//!
//! An interrupted write leaves the previous file untouched.

use std::fs;
use std::path::{Path, PathBuf};

use super::store::{SlotStore, StoreError};

/// Slot store backed by `{dir}/{key}.json` files.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for JsonDirStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let file_path = self.slot_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&file_path)?))
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let file_path = self.slot_path(key);
        let temp_path = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let file_path = self.slot_path(key);

        if file_path.exists() {
            fs::remove_file(&file_path)?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_missing_slot_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());

        assert!(store.read("habits").unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());

        store.write("habits", "[]").unwrap();

        assert_eq!(store.read("habits").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("habits.json").exists());
    }

    #[test]
    fn write_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = JsonDirStore::new(&nested);

        store.write("tasks", "[]").unwrap();

        assert!(nested.join("tasks.json").exists());
    }

    #[test]
    fn atomic_write_creates_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());

        store.write("moods", "[1]").unwrap();
        store.write("moods", "[2]").unwrap();

        assert!(!dir.path().join("moods.json.tmp").exists());
        assert_eq!(store.read("moods").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn remove_deletes_file() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());

        store.write("tasks", "[]").unwrap();
        store.remove("tasks").unwrap();

        assert!(!store.slot_path("tasks").exists());
        assert!(store.read("tasks").unwrap().is_none());
    }

    #[test]
    fn remove_missing_slot_succeeds() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());

        assert!(store.remove("nothing").is_ok());
    }
}
