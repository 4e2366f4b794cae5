//! Liked-playlists management
//!
//! Persists the set of playlists the user has marked as favorites through
//! an injected [`TextStore`] and orders display lists so liked entries come
//! first. The set is read lazily on each call — there is no in-memory
//! cache — and every failure is recovered at this boundary: an unavailable
//! store, a missing value, or text that does not decode to an identifier
//! list all read as the empty set, and a failed write still leaves the
//! caller with the computed toggle result.
//!
//! Each mutation is an independent read-modify-write cycle against the
//! store. Concurrent toggles are not serialized; the last write wins on the
//! whole set.
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::PlaylistId;
//! use verse_storage::{favorites, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let id = PlaylistId::new("5");
//!
//! assert!(favorites::toggle_liked(&store, &id));
//! assert!(favorites::is_liked(&store, &id));
//! assert!(!favorites::toggle_liked(&store, &id));
//! ```

use std::collections::HashSet;

use verse_core::types::PlaylistId;
use verse_core::{Identified, TextStore};

/// Store key holding the serialized liked-playlist identifiers
pub const LIKED_PLAYLISTS_KEY: &str = "likedPlaylists";

/// Read the current liked set from `store`
///
/// Never fails. An unavailable store or a missing value yields the empty
/// set; a value that cannot be decoded as a JSON array of identifier
/// strings is logged and also yields the empty set.
pub fn liked_playlists<S>(store: &S) -> HashSet<PlaylistId>
where
    S: TextStore + ?Sized,
{
    if !store.is_available() {
        return HashSet::new();
    }

    let raw = match store.read(LIKED_PLAYLISTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return HashSet::new(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read liked playlists");
            return HashSet::new();
        }
    };

    match serde_json::from_str::<Vec<PlaylistId>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(err) => {
            tracing::warn!(error = %err, "stored liked playlists are not an identifier list");
            HashSet::new()
        }
    }
}

/// Whether `id` is currently in the liked set
pub fn is_liked<S>(store: &S, id: &PlaylistId) -> bool
where
    S: TextStore + ?Sized,
{
    liked_playlists(store).contains(id)
}

/// Toggle `id` in the liked set and persist the result
///
/// Returns the new membership state of `id`. The state is computed in
/// memory and is authoritative for the caller even when no write happens:
/// an unavailable store skips persistence entirely and a rejected write is
/// logged.
pub fn toggle_liked<S>(store: &S, id: &PlaylistId) -> bool
where
    S: TextStore + ?Sized,
{
    let mut liked = liked_playlists(store);

    let now_liked = if liked.contains(id) {
        liked.remove(id);
        false
    } else {
        liked.insert(id.clone());
        true
    };

    if store.is_available() {
        persist(store, &liked);
    }

    now_liked
}

/// Order `items` so liked entries precede unliked ones
///
/// Stable partition: relative order within each group is preserved, so
/// applying this twice without an intervening toggle yields the same
/// sequence. When no storage context is available the input order is
/// returned unchanged. The input is never mutated.
pub fn sort_by_liked<S, T>(store: &S, items: &[T]) -> Vec<T>
where
    S: TextStore + ?Sized,
    T: Identified + Clone,
{
    if !store.is_available() {
        return items.to_vec();
    }

    let liked = liked_playlists(store);
    let (mut sorted, unliked): (Vec<T>, Vec<T>) = items
        .iter()
        .cloned()
        .partition(|item| liked.contains(item.id()));
    sorted.extend(unliked);
    sorted
}

fn persist<S>(store: &S, liked: &HashSet<PlaylistId>)
where
    S: TextStore + ?Sized,
{
    let ids: Vec<&PlaylistId> = liked.iter().collect();
    match serde_json::to_string(&ids) {
        Ok(raw) => {
            if let Err(err) = store.write(LIKED_PLAYLISTS_KEY, &raw) {
                tracing::warn!(error = %err, "failed to persist liked playlists");
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize liked playlists");
        }
    }
}
