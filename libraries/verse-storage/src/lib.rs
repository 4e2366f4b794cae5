//! Verse Player Storage
//!
//! Liked-playlists persistence for Verse Player.
//!
//! This crate implements the [`verse_core::TextStore`] capability and the
//! liked-set helpers built on top of it:
//!
//! - **`favorites`**: read, toggle, and sort by the user's liked playlists
//! - **`FileStore`**: file-per-key text store (the desktop analog of the
//!   web shell's local storage)
//! - **`MemoryStore`**: in-memory double with unavailable and read-only
//!   variants for exercising the degraded paths
//!
//! # Example
//!
//! ```rust
//! use verse_core::catalog;
//! use verse_storage::{favorites, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let playlists = catalog::playlists();
//!
//! assert!(favorites::toggle_liked(&store, &playlists[1].id));
//! let sorted = favorites::sort_by_liked(&store, &playlists);
//! assert_eq!(sorted[0].id, playlists[1].id);
//! ```

mod file;
mod memory;

pub mod favorites;

pub use file::FileStore;
pub use memory::MemoryStore;
