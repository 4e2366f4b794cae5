/// Core traits for Verse Player
use crate::error::Result;

/// Key-value text store capability
///
/// Stands in for the host environment's persistent text storage (browser
/// local storage on the web shell, a file per key on desktop). Values are
/// plain text round-trips; callers own whatever encoding they store.
///
/// `is_available` is the execution-context probe: a rendering context
/// without persistent storage answers `false`, and callers are expected to
/// degrade reads to their empty/identity fallbacks and skip writes
/// entirely.
pub trait TextStore {
    /// Whether a persistent storage context is present
    fn is_available(&self) -> bool {
        true
    }

    /// Read the value stored under `key`, `None` when the key is absent
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be read
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the store rejects or fails the write
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Record exposing a string identifier
///
/// Implemented by the catalog records so list helpers can check liked-set
/// membership without knowing the concrete record type.
pub trait Identified {
    /// The record's identifier
    fn id(&self) -> &str;
}
