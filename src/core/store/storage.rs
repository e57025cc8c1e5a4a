//! Durable key-value storage for store snapshots
//!
//! Each store persists one JSON record under its own key; keys never
//! overlap, so a write for one store cannot clobber another. A record
//! that is missing or fails to parse is treated as first run: the caller
//! falls back to its defaults and the failure is only logged.

use crate::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Record key for the academic profile.
pub const PROFILE_KEY: &str = "profile";

/// Record key for the planned-course list.
pub const COURSES_KEY: &str = "courses";

/// Record key for the requirement categories.
pub const REQUIREMENTS_KEY: &str = "requirements";

/// Handle over the directory holding persisted records
///
/// Cheap to clone; every store keeps its own copy.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open storage rooted at the given directory.
    ///
    /// The directory does not have to exist yet; it is created on the
    /// first write.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default storage root under the platform data directory
    ///
    /// Returns:
    /// - Linux: `~/.local/share/gpaplanner`
    /// - macOS: `~/Library/Application Support/gpaplanner`
    /// - Windows: `%APPDATA%\gpaplanner`
    #[must_use]
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpaplanner")
    }

    /// The directory this handle reads and writes.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load and deserialize the record stored under `key`.
    ///
    /// Returns `None` when the record is absent, unreadable, or fails to
    /// parse; parse and read failures are logged, never surfaced.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.record_path(key);
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Discarding unparsable record '{key}': {e}");
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read record '{key}': {e}");
                None
            }
        }
    }

    /// Serialize `value` and write it under `key`, replacing any
    /// previous record.
    ///
    /// Write failures are logged and otherwise swallowed; persistence is
    /// best-effort and editing must never block on it.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            warn!("Failed to create storage directory {}: {e}", self.root.display());
            return;
        }

        match serde_json::to_string_pretty(value) {
            Ok(json) => {
                if let Err(e) = fs::write(self.record_path(key), json) {
                    warn!("Failed to write record '{key}': {e}");
                }
            }
            Err(e) => warn!("Failed to serialize record '{key}': {e}"),
        }
    }

    /// Delete the record stored under `key`, if any.
    pub fn clear(&self, key: &str) {
        let path = self.record_path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!("Failed to remove record '{key}': {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_record_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path());

        let loaded: Option<Vec<String>> = storage.load(COURSES_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path());

        storage.save(COURSES_KEY, &vec!["a".to_string(), "b".to_string()]);
        let loaded: Option<Vec<String>> = storage.load(COURSES_KEY);
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_unparsable_record_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path());

        std::fs::write(dir.path().join("courses.json"), "not json {").unwrap();
        let loaded: Option<Vec<String>> = storage.load(COURSES_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path());

        storage.save(PROFILE_KEY, &"x".to_string());
        storage.clear(PROFILE_KEY);
        let loaded: Option<String> = storage.load(PROFILE_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_keys_are_disjoint() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(dir.path());

        storage.save(PROFILE_KEY, &"profile".to_string());
        storage.save(COURSES_KEY, &"courses".to_string());
        storage.clear(COURSES_KEY);

        let profile: Option<String> = storage.load(PROFILE_KEY);
        assert_eq!(profile, Some("profile".to_string()));
    }
}
