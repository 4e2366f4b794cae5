//! Shipped catalog configuration
//!
//! The playlist and song records the UI renders, plus the derived display
//! lists built from them. Everything here is static configuration: the
//! constructor functions return fresh values on every call and nothing is
//! cached — callers needing repeated access cache the result themselves.

use crate::types::{Color, Playlist, Song};

/// Identifier suffix for the "more playlists" display set
pub const MORE_SUFFIX: &str = "a";

/// Identifier suffix for the sidebar display set
pub const SIDEBAR_SUFFIX: &str = "_side";

/// The base playlist catalog, in display order
pub fn playlists() -> Vec<Playlist> {
    vec![
        Playlist::new(
            "1",
            "Electronic Party",
            Color::Teal,
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/v1693776174/spotify-astro/playlist_1_yci5uf.jpg",
            &["Avicii", "Alok"],
        ),
        Playlist::new(
            "2",
            "Trance",
            Color::Green,
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/v1693776174/spotify-astro/playlist_2_f9ymlx.jpg",
            &["Tiesto", "Armin Van Buuren"],
        ),
        Playlist::new(
            "3",
            "Trap Vibes",
            Color::Rose,
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/v1693776175/spotify-astro/playlist_3_grshca.jpg",
            &["Post Malone", "Travis Scott", "21 savage"],
        ),
        Playlist::new(
            "4",
            "Beatles Classics",
            Color::Red,
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/v1693776175/spotify-astro/playlist_4_ap5xnb.jpg",
            &["The Beatles"],
        ),
        Playlist::new(
            "5",
            "Electronic Dance",
            Color::Pink,
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/v1693776175/spotify-astro/playlist_5_erjyb7.jpg",
            &["Deadmau5"],
        ),
        Playlist::new(
            "6",
            "Cow songs",
            Color::Gray,
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/v1693776474/spotify-astro/R-15112137-1586815179-1911_fsyl58.jpg",
            &["Saint Hilda", "Canada Buffalo"],
        ),
    ]
}

/// Base catalog relabeled for the "more playlists" section
pub fn more_playlists() -> Vec<Playlist> {
    playlists()
        .iter()
        .map(|playlist| playlist.with_id_suffix(MORE_SUFFIX))
        .collect()
}

/// Base catalog relabeled for the sidebar
pub fn sidebar_playlists() -> Vec<Playlist> {
    playlists()
        .iter()
        .map(|playlist| playlist.with_id_suffix(SIDEBAR_SUFFIX))
        .collect()
}

/// Base catalog followed by both derived sets, in that order
pub fn all_playlists() -> Vec<Playlist> {
    let mut all = playlists();
    all.extend(more_playlists());
    all.extend(sidebar_playlists());
    all
}

/// The song catalog, in display order
pub fn songs() -> Vec<Song> {
    vec![
        Song::new(
            "1",
            "The Nights",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776175/spotify-astro/song_1_qitfwl.jpg",
            &["Avicii"],
            "The Days / Nights",
            "2:56",
        ),
        Song::new(
            "2",
            "Saint-Tropez",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776175/spotify-astro/song_2_cijs8v.jpg",
            &["Post Malone"],
            "Hollywood's Bleeding",
            "2:23",
        ),
        Song::new(
            "3",
            "SICKO MODE",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776176/spotify-astro/song_3_td9ncs.jpg",
            &["Travis Scott", "Drake"],
            "ASTROWORLD",
            "5:13",
        ),
        Song::new(
            "4",
            "Blinding Lights",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776176/spotify-astro/song_4_lwumgu.png",
            &["The Weeknd"],
            "After Hours",
            "3:22",
        ),
        Song::new(
            "5",
            "Shape of You",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776175/spotify-astro/song_5_rd5xqa.jpg",
            &["Ed Sheeran"],
            "÷ (Divide)",
            "3:53",
        ),
        Song::new(
            "6",
            "Uptown Funk",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776175/spotify-astro/song_6_f1lt7y.jpg",
            &["Mark Ronson", "Bruno Mars"],
            "Uptown Special",
            "4:30",
        ),
        Song::new(
            "7",
            "Bad Guy",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776175/spotify-astro/song_7_m7f0mh.jpg",
            &["Billie Eilish"],
            "When We All Fall Asleep, Where Do We Go?",
            "3:14",
        ),
        Song::new(
            "8",
            "Yesterday",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776175/spotify-astro/song_8_hwxisr.jpg",
            &["The Beatles"],
            "Today & Tomorrow",
            "4:38",
        ),
        Song::new(
            "9",
            "Havana",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776176/spotify-astro/song_9_szemzp.jpg",
            &["Camila Cabello", "Young Thug"],
            "Camila",
            "3:37",
        ),
        Song::new(
            "10",
            "Radioactive",
            "https://res.cloudinary.com/dp3ppkxo5/image/upload/w_40,h_40,c_scale/v1693776176/spotify-astro/song_10_sz0cib.jpg",
            &["Imagine Dragons"],
            "Night Visions",
            "3:07",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base_catalog_identifiers_are_unique() {
        let base = playlists();
        let ids: HashSet<&str> = base.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(base.len(), 6);
        assert_eq!(ids.len(), base.len());
    }

    #[test]
    fn derived_lists_mirror_the_base_catalog() {
        let base = playlists();

        for (derived, suffix) in [
            (more_playlists(), MORE_SUFFIX),
            (sidebar_playlists(), SIDEBAR_SUFFIX),
        ] {
            assert_eq!(derived.len(), base.len());
            for (source, relabeled) in base.iter().zip(&derived) {
                assert_eq!(
                    relabeled.id.as_str(),
                    format!("{}{}", source.id.as_str(), suffix)
                );
                assert_eq!(relabeled.title, source.title);
                assert_eq!(relabeled.color, source.color);
                assert_eq!(relabeled.cover, source.cover);
                assert_eq!(relabeled.artists, source.artists);
            }
        }
    }

    #[test]
    fn derived_identifiers_never_collide() {
        let all = all_playlists();
        let ids: HashSet<&str> = all.iter().map(|p| p.id.as_str()).collect();

        // Base, "more", and sidebar identifiers are pairwise distinct
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn combined_view_preserves_order() {
        let all = all_playlists();
        let base = playlists();

        assert_eq!(all.len(), base.len() * 3);
        assert_eq!(all[0].id.as_str(), "1");
        assert_eq!(all[base.len()].id.as_str(), "1a");
        assert_eq!(all[base.len() * 2].id.as_str(), "1_side");
    }

    #[test]
    fn song_catalog_durations_are_well_formed() {
        let songs = songs();

        assert_eq!(songs.len(), 10);
        for song in &songs {
            assert!(song.duration_secs().is_some(), "song {}", song.id);
        }
    }
}
