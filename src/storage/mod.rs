//! Storage layer for TeachMaster
//!
//! A small key-value abstraction with a SQLite backend for real use and an
//! in-memory backend for tests and throwaway sessions.

use std::collections::BTreeMap;

pub mod db;
pub mod models;

pub use db::Database;
pub use models::*;

/// Errors raised by a key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// SQLite reported a failure.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database file or its directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused the write.
    #[error("Storage is read-only")]
    ReadOnly,
}

/// A string-keyed, string-valued storage slot collection.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;
}

/// In-memory key-value store.
///
/// Can be switched to read-only to simulate a backend that rejects writes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` and `remove` fail with `ReadOnly`.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }
        Ok(self.entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        assert!(store.remove("k").unwrap());
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_read_only_rejects_writes() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_read_only(true);

        assert!(matches!(store.set("k", "w"), Err(StorageError::ReadOnly)));
        assert!(matches!(store.remove("k"), Err(StorageError::ReadOnly)));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
