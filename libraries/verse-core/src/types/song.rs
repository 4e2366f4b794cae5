/// Song domain types
use crate::traits::Identified;
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// Song catalog record
///
/// Immutable once constructed. The duration is carried in its display form
/// (`M:SS`); use [`Song::duration_secs`] for a numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Display title
    pub title: String,

    /// Artwork image URI
    pub image: String,

    /// Performing artists, in display order
    pub artists: Vec<String>,

    /// Album name
    pub album: String,

    /// Display duration, formatted `M:SS`
    pub duration: String,
}

impl Song {
    /// Create a new song record
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        artists: &[&str],
        album: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: SongId::new(id),
            title: title.into(),
            image: image.into(),
            artists: artists.iter().map(|a| (*a).to_string()).collect(),
            album: album.into(),
            duration: duration.into(),
        }
    }

    /// Duration in whole seconds, parsed from the `M:SS` display text
    ///
    /// Returns `None` when the text does not follow the `M:SS` shape.
    pub fn duration_secs(&self) -> Option<u32> {
        let (minutes, seconds) = self.duration.split_once(':')?;
        if seconds.len() != 2 {
            return None;
        }
        let minutes: u32 = minutes.parse().ok()?;
        let seconds: u32 = seconds.parse().ok()?;
        if seconds >= 60 {
            return None;
        }
        Some(minutes * 60 + seconds)
    }
}

impl Identified for Song {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
