//! File-backed text store
//!
//! Desktop analog of the web shell's local storage: one UTF-8 text file per
//! key under a base directory. Keys are sanitized for the filesystem and
//! the directory is created on first write.

use std::fs;
use std::path::{Path, PathBuf};

use verse_core::{Result, TextStore};

/// File-backed [`TextStore`]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    ///
    /// The directory does not need to exist yet; it is created by the first
    /// write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Base directory holding the store files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map characters that are invalid in filenames on common filesystems
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

impl TextStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_round_trip_per_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.read("likedPlaylists").unwrap(), None);

        store.write("likedPlaylists", "[\"1\"]").unwrap();
        store.write("theme", "dark").unwrap();

        assert_eq!(
            store.read("likedPlaylists").unwrap().as_deref(),
            Some("[\"1\"]")
        );
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn keys_are_sanitized_for_the_filesystem() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.write("nested/key", "value").unwrap();

        // The separator was replaced, so no subdirectory appeared
        assert!(dir.path().join("nested_key.json").exists());
        assert_eq!(store.read("nested/key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn write_failure_surfaces_as_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // The base directory path runs through an existing file
        let store = FileStore::new(blocker.join("store"));
        assert!(store.write("likedPlaylists", "[]").is_err());
    }
}
