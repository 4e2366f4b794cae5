//! In-memory text store
//!
//! Test double for the [`TextStore`] capability. The `unavailable` and
//! `read_only` constructors exercise the degraded paths of the liked-set
//! helpers without touching the filesystem.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use verse_core::{Result, TextStore, VerseError};

/// In-memory [`TextStore`] backed by a plain map
#[derive(Debug)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    available: bool,
    writable: bool,
}

impl MemoryStore {
    /// Create an available, writable store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: true,
            writable: true,
        }
    }

    /// Create a store whose probe reports no storage context
    ///
    /// Reads and writes still reach the underlying map, so tests can seed
    /// state and verify that probe-gated callers never touch it.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Create a store that answers reads but rejects every write
    pub fn read_only() -> Self {
        Self {
            writable: false,
            ..Self::new()
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if !self.writable {
            return Err(VerseError::store("text store is read-only"));
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip() {
        let store = MemoryStore::new();

        assert_eq!(store.read("theme").unwrap(), None);
        store.write("theme", "dark").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));

        store.write("theme", "light").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn unavailable_store_fails_the_probe() {
        assert!(MemoryStore::new().is_available());
        assert!(!MemoryStore::unavailable().is_available());
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryStore::read_only();

        assert!(store.is_available());
        assert!(store.write("theme", "dark").is_err());
        assert_eq!(store.read("theme").unwrap(), None);
    }
}
