//! Durable key-value backends.
//!
//! Each feature store persists its whole entity list under one key. Values are
//! JSON text; the backend never interprets them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

/// Last-write-wins storage of whole values by key.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the delete fails.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ── File backend ───────────────────────────────────────────────────

/// One `<key>.json` file per key inside a data directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::persistence(dir.display(), e))?;
        Ok(Self { dir })
    }

    /// The directory where entries are stored.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for `key`.
    #[must_use]
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::persistence(path.display(), e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value).map_err(|e| StoreError::persistence(tmp.display(), e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StoreError::persistence(path.display(), e))?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::persistence(path.display(), e)),
        }
    }
}

// ── Memory backend ─────────────────────────────────────────────────

/// In-process map, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail until switched off again.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored text for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::persistence(key, "write rejected"));
        }
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data")).unwrap();

        assert_eq!(store.get("risks").unwrap(), None);
        store.set("risks", "[]").unwrap();
        assert_eq!(store.get("risks").unwrap().as_deref(), Some("[]"));
        assert!(store.path("risks").ends_with("risks.json"));

        store.set("risks", "[1]").unwrap();
        assert_eq!(store.get("risks").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.set("ideas", "[]").unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["ideas.json".to_string()]);
    }

    #[test]
    fn removing_missing_key_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(store.remove("timelines").is_ok());
        store.set("timelines", "[]").unwrap();
        store.remove("timelines").unwrap();
        assert_eq!(store.get("timelines").unwrap(), None);
    }

    #[test]
    fn memory_store_can_reject_writes() {
        let store = MemoryStore::new();
        store.set("solutions", "[]").unwrap();
        store.fail_writes(true);
        let err = store.set("solutions", "[1]").unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));
        assert_eq!(store.raw("solutions").as_deref(), Some("[]"));
    }
}
