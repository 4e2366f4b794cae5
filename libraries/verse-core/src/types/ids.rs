/// ID types for catalog entities
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Playlist identifier
///
/// Opaque string key, unique within a catalog. Derived display lists append
/// a fixed suffix to the base identifier, so a `PlaylistId` need not name a
/// base-catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Create a new playlist ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Copy of this ID with `suffix` appended
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}{}", self.0, suffix))
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets identifier sets be queried by plain &str
impl Borrow<str> for PlaylistId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Song identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    /// Create a new song ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn playlist_id_from_string() {
        let id = PlaylistId::new("4");
        assert_eq!(id.as_str(), "4");
        assert_eq!(format!("{}", id), "4");
    }

    #[test]
    fn playlist_id_suffix_appends() {
        let id = PlaylistId::new("4");
        assert_eq!(id.with_suffix("_side").as_str(), "4_side");
        assert_ne!(id.with_suffix("a"), id);
    }

    #[test]
    fn playlist_id_set_lookup_by_str() {
        let mut liked: HashSet<PlaylistId> = HashSet::new();
        liked.insert(PlaylistId::new("2"));

        assert!(liked.contains("2"));
        assert!(!liked.contains("3"));
    }

    #[test]
    fn song_id_display() {
        let id = SongId::new("10");
        assert_eq!(format!("{}", id), "10");
    }
}
