//! Requirement-category store

use crate::core::models::RequirementCategory;
use crate::core::parse::to_number;
use crate::core::store::storage::{Storage, REQUIREMENTS_KEY};
use serde::{Deserialize, Serialize};

/// Persisted shape of one requirement category
///
/// Credit fields stay strings to preserve form-input fidelity, like the
/// profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementRecord {
    /// Opaque unique token
    pub id: String,
    /// Display label
    pub label: String,
    /// Completed credit hours, as typed
    pub completed: String,
    /// Required credit hours, as typed
    pub required: String,
}

impl Default for RequirementRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            completed: "0".to_string(),
            required: "0".to_string(),
        }
    }
}

/// The requirement categories shown on first run.
fn default_requirements() -> Vec<RequirementRecord> {
    vec![
        RequirementRecord {
            id: "majorCore".to_string(),
            label: "Major Required".to_string(),
            completed: "0".to_string(),
            required: "30".to_string(),
        },
        RequirementRecord {
            id: "majorElective".to_string(),
            label: "Major Elective".to_string(),
            completed: "0".to_string(),
            required: "42".to_string(),
        },
        RequirementRecord {
            id: "liberalArts".to_string(),
            label: "General Education".to_string(),
            completed: "0".to_string(),
            required: "36".to_string(),
        },
    ]
}

/// Owns the requirement-category list and its persistence
///
/// The list never goes empty; removal of the last category is rejected.
/// Categories loaded without an id are assigned a positional one so
/// every entry stays addressable.
#[derive(Debug)]
pub struct RequirementStore {
    storage: Storage,
    entries: Vec<RequirementRecord>,
}

impl RequirementStore {
    /// Load the categories from storage, falling back to the default
    /// set when the record is missing, unparsable, or empty.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let entries = storage
            .load::<Vec<RequirementRecord>>(REQUIREMENTS_KEY)
            .filter(|entries| !entries.is_empty())
            .map(sanitize)
            .unwrap_or_else(default_requirements);

        Self { storage, entries }
    }

    /// The raw records as persisted, in list order.
    #[must_use]
    pub fn records(&self) -> &[RequirementRecord] {
        &self.entries
    }

    /// Typed view of the categories for the progress calculator.
    ///
    /// Non-numeric credit text coerces to 0.
    #[must_use]
    pub fn categories(&self) -> Vec<RequirementCategory> {
        self.entries
            .iter()
            .map(|record| RequirementCategory {
                id: record.id.clone(),
                label: record.label.clone(),
                completed: to_number(&record.completed, 0.0),
                required: to_number(&record.required, 0.0),
            })
            .collect()
    }

    /// Number of categories (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a category with a fresh unique id and return that id.
    ///
    /// # Arguments
    /// * `label` - Display label for the new category
    pub fn add_category(&mut self, label: &str) -> String {
        let id = self.next_id();
        self.entries.push(RequirementRecord {
            id: id.clone(),
            label: label.to_string(),
            ..RequirementRecord::default()
        });
        self.persist();
        id
    }

    /// Remove the category with the given id.
    ///
    /// # Returns
    /// `false` (and no change) when the id is unknown or the category is
    /// the last one.
    pub fn remove_category(&mut self, id: &str) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let Some(pos) = self.entries.iter().position(|r| r.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        self.persist();
        true
    }

    /// Set the label of the category with the given id.
    ///
    /// # Returns
    /// `false` when the id is unknown.
    pub fn set_label(&mut self, id: &str, label: &str) -> bool {
        self.update(id, |record| record.label = label.to_string())
    }

    /// Set the completed credit hours from raw form text.
    ///
    /// # Returns
    /// `false` when the id is unknown.
    pub fn set_completed(&mut self, id: &str, raw: &str) -> bool {
        self.update(id, |record| record.completed = raw.to_string())
    }

    /// Set the required credit hours from raw form text.
    ///
    /// # Returns
    /// `false` when the id is unknown.
    pub fn set_required(&mut self, id: &str, raw: &str) -> bool {
        self.update(id, |record| record.required = raw.to_string())
    }

    /// Restore the default categories and drop the persisted snapshot.
    pub fn reset(&mut self) {
        self.entries = default_requirements();
        self.storage.clear(REQUIREMENTS_KEY);
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut RequirementRecord)) -> bool {
        let Some(record) = self.entries.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        apply(record);
        self.persist();
        true
    }

    fn next_id(&self) -> String {
        let mut n = self.entries.len();
        loop {
            let candidate = format!("requirement-{n}");
            if !self.entries.iter().any(|r| r.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn persist(&self) {
        self.storage.save(REQUIREMENTS_KEY, &self.entries);
    }
}

/// Assign positional ids to loaded entries that lack one.
fn sanitize(entries: Vec<RequirementRecord>) -> Vec<RequirementRecord> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, mut record)| {
            if record.id.is_empty() {
                record.id = format!("requirement-{index}");
            }
            record
        })
        .collect()
}
