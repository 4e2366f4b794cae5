/// Core error types for Verse Player
use thiserror::Error;

/// Result type alias using `VerseError`
pub type Result<T> = std::result::Result<T, VerseError>;

/// Core error type for Verse Player
#[derive(Error, Debug)]
pub enum VerseError {
    /// Text-store errors
    #[error("store error: {0}")]
    Store(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl VerseError {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
