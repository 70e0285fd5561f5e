//! Persistence boundary for the completion set
//!
//! A key-value string store with two operations. The store is consumed, not
//! owned: implementations decide where the bytes live.

use crate::error::StorageError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Key-value string store scoped to the session
pub trait ProgressStorage: Send + Sync {
    /// Load the value persisted under `key`, if any
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store is unreadable.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns [`StorageError`] when the write fails.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and the demo binary
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        let mut guard = storage
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(key.into(), value.into());
        drop(guard);
        storage
    }
}

impl ProgressStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one JSON file per key under a base directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `base_dir`
    ///
    /// The directory is created on first save, not here.
    #[inline]
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl ProgressStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
