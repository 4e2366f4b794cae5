//! Verse Player Core
//!
//! Content-layer types and configuration for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the UI
//! shells: the catalog records, the derived display lists, and the
//! capability traits the storage layer implements.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Song`, the `Color` palette, typed ids
//! - **Catalog**: the shipped playlist/song records and their derived lists
//! - **Core Traits**: `TextStore` (key-value text storage capability),
//!   `Identified` (string-identifier access for display records)
//! - **Error Handling**: unified `VerseError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::catalog;
//!
//! let base = catalog::playlists();
//! let sidebar = catalog::sidebar_playlists();
//!
//! // Derived lists mirror the base catalog entry for entry
//! assert_eq!(base.len(), sidebar.len());
//! assert_eq!(base[0].title, sidebar[0].title);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VerseError};
pub use traits::{Identified, TextStore};

// Export all types
pub use types::{Color, Playlist, PlaylistId, Song, SongId};
