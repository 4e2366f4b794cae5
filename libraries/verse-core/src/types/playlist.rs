/// Playlist domain types
use crate::traits::Identified;
use crate::types::{Color, PlaylistId};
use serde::{Deserialize, Serialize};

/// Playlist catalog record
///
/// Immutable once constructed: catalog entries are never mutated in place.
/// Derived display sets are produced by copying a record and relabeling its
/// identifier via [`Playlist::with_id_suffix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Display title
    pub title: String,

    /// Cover gradient palette entry
    pub color: Color,

    /// Cover image URI
    pub cover: String,

    /// Featured artists, in display order
    pub artists: Vec<String>,
}

impl Playlist {
    /// Create a new playlist record
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        color: Color,
        cover: impl Into<String>,
        artists: &[&str],
    ) -> Self {
        Self {
            id: PlaylistId::new(id),
            title: title.into(),
            color,
            cover: cover.into(),
            artists: artists.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Copy of this record with `suffix` appended to the identifier
    ///
    /// Every other field is carried over unchanged.
    pub fn with_id_suffix(&self, suffix: &str) -> Self {
        Self {
            id: self.id.with_suffix(suffix),
            ..self.clone()
        }
    }
}

impl Identified for Playlist {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
