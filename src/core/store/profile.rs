//! Academic-profile store

use crate::core::models::AcademicProfile;
use crate::core::parse::to_number;
use crate::core::store::storage::{Storage, PROFILE_KEY};
use serde::{Deserialize, Serialize};

/// Persisted academic profile
///
/// Numeric fields stay strings so the snapshot preserves exactly what
/// the user typed into the form; coercion happens in [`profile`].
///
/// [`profile`]: AcademicProfileStore::profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    /// Cumulative GPA on record
    pub current_gpa: String,
    /// GPA the student is aiming for
    pub target_gpa: String,
    /// Credit hours already earned
    pub total_credits: String,
    /// Credit hours required for graduation
    pub required_credits: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            current_gpa: "0".to_string(),
            target_gpa: "4.0".to_string(),
            total_credits: "0".to_string(),
            required_credits: "130".to_string(),
        }
    }
}

/// Owns the scalar academic profile and its persistence
///
/// Missing fields in a loaded snapshot pick up their defaults; a record
/// that fails to parse entirely is replaced by the default profile.
#[derive(Debug)]
pub struct AcademicProfileStore {
    storage: Storage,
    record: ProfileRecord,
}

impl AcademicProfileStore {
    /// Load the profile from storage, falling back to defaults.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let record = storage.load(PROFILE_KEY).unwrap_or_default();
        Self { storage, record }
    }

    /// The raw record as persisted (string-valued fields).
    #[must_use]
    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Typed view of the profile for the calculators.
    ///
    /// Non-numeric field text coerces to 0.
    #[must_use]
    pub fn profile(&self) -> AcademicProfile {
        AcademicProfile {
            current_gpa: to_number(&self.record.current_gpa, 0.0),
            target_gpa: to_number(&self.record.target_gpa, 0.0),
            total_credits: to_number(&self.record.total_credits, 0.0),
            required_credits: to_number(&self.record.required_credits, 0.0),
        }
    }

    /// Set the current GPA from raw form text.
    pub fn set_current_gpa(&mut self, raw: &str) {
        self.record.current_gpa = raw.to_string();
        self.persist();
    }

    /// Set the target GPA from raw form text.
    pub fn set_target_gpa(&mut self, raw: &str) {
        self.record.target_gpa = raw.to_string();
        self.persist();
    }

    /// Set the earned credit hours from raw form text.
    pub fn set_total_credits(&mut self, raw: &str) {
        self.record.total_credits = raw.to_string();
        self.persist();
    }

    /// Set the required credit hours from raw form text.
    pub fn set_required_credits(&mut self, raw: &str) {
        self.record.required_credits = raw.to_string();
        self.persist();
    }

    /// Restore the default profile and drop the persisted snapshot.
    pub fn reset(&mut self) {
        self.record = ProfileRecord::default();
        self.storage.clear(PROFILE_KEY);
    }

    fn persist(&self) {
        self.storage.save(PROFILE_KEY, &self.record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> AcademicProfileStore {
        AcademicProfileStore::load(Storage::open(dir.path()))
    }

    #[test]
    fn test_first_run_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let profile = store.profile();
        assert!(profile.current_gpa.abs() < f64::EPSILON);
        assert!((profile.target_gpa - 4.0).abs() < f64::EPSILON);
        assert!((profile.required_credits - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edits_round_trip_as_typed() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = store_in(&dir);
            store.set_current_gpa("3.45");
            store.set_total_credits("98");
        }

        let reloaded = store_in(&dir);
        // The raw text survives verbatim
        assert_eq!(reloaded.record().current_gpa, "3.45");
        assert_eq!(reloaded.record().total_credits, "98");
        assert!((reloaded.profile().current_gpa - 3.45).abs() < 1e-9);
    }

    #[test]
    fn test_non_numeric_text_coerces_to_zero() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.set_target_gpa("four point oh");
        assert!(store.profile().target_gpa.abs() < f64::EPSILON);
        // The garbage text itself is preserved
        assert_eq!(store.record().target_gpa, "four point oh");
    }

    #[test]
    fn test_partial_snapshot_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("profile.json"),
            r#"{"currentGpa": "3.2"}"#,
        )
        .unwrap();

        let store = store_in(&dir);
        assert_eq!(store.record().current_gpa, "3.2");
        assert_eq!(store.record().target_gpa, "4.0");
        assert_eq!(store.record().required_credits, "130");
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set_current_gpa("2.0");
        store.reset();

        assert_eq!(store.record(), &ProfileRecord::default());
        assert!(!dir.path().join("profile.json").exists());
    }
}
