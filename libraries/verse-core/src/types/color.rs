/// Cover color palette
use serde::{Deserialize, Serialize};

/// Fixed palette for playlist cover gradients
///
/// Each entry carries an accent tone for the cover treatment and a dark
/// tone for the backdrop behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Teal accent
    Teal,
    /// Green accent
    Green,
    /// Rose accent
    Rose,
    /// Red accent
    Red,
    /// Pink accent
    Pink,
    /// Gray accent
    Gray,
}

impl Color {
    /// Palette entry name as used in theme configuration
    pub fn name(self) -> &'static str {
        match self {
            Color::Teal => "teal",
            Color::Green => "green",
            Color::Rose => "rose",
            Color::Red => "red",
            Color::Pink => "pink",
            Color::Gray => "gray",
        }
    }

    /// Accent tone hex value
    pub fn accent(self) -> &'static str {
        match self {
            Color::Teal => "#14b8a6",
            Color::Green => "#22c55e",
            Color::Rose => "#f43f5e",
            Color::Red => "#ef4444",
            Color::Pink => "#ec4899",
            Color::Gray => "#6b7280",
        }
    }

    /// Dark backdrop tone hex value
    pub fn dark(self) -> &'static str {
        match self {
            Color::Teal => "#134e4a",
            Color::Green => "#14532d",
            Color::Rose => "#881337",
            Color::Red => "#7f1d1d",
            Color::Pink => "#831843",
            Color::Gray => "#111827",
        }
    }
}
