//! Domain types for the content core

mod color;
mod ids;
mod playlist;
mod song;

pub use color::Color;
pub use ids::{PlaylistId, SongId};
pub use playlist::Playlist;
pub use song::Song;
