//! Planned-course store

use crate::core::models::{Grade, PlannedCourse};
use crate::core::store::storage::{Storage, COURSES_KEY};
use serde::{Deserialize, Serialize};

/// Persisted shape of one planned course.
///
/// The grade is kept as its raw symbol so an unrecognized value can be
/// repaired per entry instead of discarding the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CourseRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    credits: f64,
    #[serde(default = "default_grade_symbol")]
    grade: String,
}

fn default_grade_symbol() -> String {
    Grade::APlus.symbol().to_string()
}

/// The course plan shown on first run.
fn default_courses() -> Vec<PlannedCourse> {
    vec![
        PlannedCourse::new("Web Programming", 3.0, Grade::APlus),
        PlannedCourse::new("Database Systems", 3.0, Grade::BPlus),
    ]
}

/// Owns the ordered list of planned courses and its persistence
///
/// The list never goes empty: removal of the last entry is rejected, and
/// a persisted snapshot that comes back empty is replaced by the default
/// plan. Every mutation writes the full snapshot back through storage.
#[derive(Debug)]
pub struct CoursePlanStore {
    storage: Storage,
    courses: Vec<PlannedCourse>,
}

impl CoursePlanStore {
    /// Load the course plan from storage, falling back to the default
    /// plan when the record is missing, unparsable, or empty.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let courses = storage
            .load::<Vec<CourseRecord>>(COURSES_KEY)
            .map(sanitize)
            .filter(|courses| !courses.is_empty())
            .unwrap_or_else(default_courses);

        Self { storage, courses }
    }

    /// The planned courses, in plan order.
    #[must_use]
    pub fn courses(&self) -> &[PlannedCourse] {
        &self.courses
    }

    /// Number of entries on the plan (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Always false; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Append a blank entry (3 credits, A+) and return its index.
    pub fn add_course(&mut self) -> usize {
        self.courses.push(PlannedCourse::default());
        self.persist();
        self.courses.len() - 1
    }

    /// Remove the entry at `index`.
    ///
    /// # Returns
    /// `false` (and no change) when the index is out of range or the
    /// entry is the last one on the plan.
    pub fn remove_course(&mut self, index: usize) -> bool {
        if self.courses.len() <= 1 || index >= self.courses.len() {
            return false;
        }
        self.courses.remove(index);
        self.persist();
        true
    }

    /// Set the name of the entry at `index`.
    ///
    /// # Returns
    /// `false` when the index is out of range.
    pub fn set_name(&mut self, index: usize, name: &str) -> bool {
        let Some(course) = self.courses.get_mut(index) else {
            return false;
        };
        course.name = name.to_string();
        self.persist();
        true
    }

    /// Set the credit hours of the entry at `index` from raw form text.
    ///
    /// Non-numeric text coerces to 0; editing is never blocked.
    ///
    /// # Returns
    /// `false` when the index is out of range.
    pub fn set_credits(&mut self, index: usize, raw: &str) -> bool {
        let Some(course) = self.courses.get_mut(index) else {
            return false;
        };
        course.credits = crate::core::parse::to_number(raw, 0.0);
        self.persist();
        true
    }

    /// Set the grade of the entry at `index`.
    ///
    /// # Returns
    /// `false` when the index is out of range.
    pub fn set_grade(&mut self, index: usize, grade: Grade) -> bool {
        let Some(course) = self.courses.get_mut(index) else {
            return false;
        };
        course.grade = grade;
        self.persist();
        true
    }

    /// Restore the default plan and drop the persisted snapshot.
    pub fn reset(&mut self) {
        self.courses = default_courses();
        self.storage.clear(COURSES_KEY);
    }

    fn persist(&self) {
        let records: Vec<CourseRecord> = self
            .courses
            .iter()
            .map(|course| CourseRecord {
                name: course.name.clone(),
                credits: course.credits,
                grade: course.grade.symbol().to_string(),
            })
            .collect();
        self.storage.save(COURSES_KEY, &records);
    }
}

/// Repair loaded records entry by entry: unknown grade symbols fall back
/// to A+, matching how a new entry is created.
fn sanitize(records: Vec<CourseRecord>) -> Vec<PlannedCourse> {
    records
        .into_iter()
        .map(|record| PlannedCourse {
            name: record.name,
            credits: record.credits,
            grade: record.grade.parse().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CoursePlanStore {
        CoursePlanStore::load(Storage::open(dir.path()))
    }

    #[test]
    fn test_first_run_uses_default_plan() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.len(), 2);
        assert_eq!(store.courses()[0].name, "Web Programming");
        assert_eq!(store.courses()[1].grade, Grade::BPlus);
    }

    #[test]
    fn test_mutations_round_trip() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = store_in(&dir);
            let idx = store.add_course();
            assert!(store.set_name(idx, "Operating Systems"));
            assert!(store.set_credits(idx, "4"));
            assert!(store.set_grade(idx, Grade::C0));
        }

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.len(), 3);
        let course = &reloaded.courses()[2];
        assert_eq!(course.name, "Operating Systems");
        assert!((course.credits - 4.0).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::C0);
    }

    #[test]
    fn test_non_numeric_credits_coerce_to_zero() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(store.set_credits(0, "lots"));
        assert!(store.courses()[0].credits.abs() < f64::EPSILON);
    }

    #[test]
    fn test_removing_last_entry_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(store.remove_course(0));
        assert_eq!(store.len(), 1);
        // Sole remaining entry stays put
        assert!(!store.remove_course(0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(!store.remove_course(9));
        assert!(!store.set_name(9, "x"));
        assert!(!store.set_credits(9, "3"));
        assert!(!store.set_grade(9, Grade::F));
    }

    #[test]
    fn test_unknown_grade_symbol_repairs_to_a_plus() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("courses.json"),
            r#"[{"name": "Mystery", "credits": 3.0, "grade": "Z-"}]"#,
        )
        .unwrap();

        let store = store_in(&dir);
        assert_eq!(store.courses()[0].grade, Grade::APlus);
    }

    #[test]
    fn test_unparsable_snapshot_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("courses.json"), "{{nope").unwrap();

        let store = store_in(&dir);
        assert_eq!(store.len(), 2);
        assert_eq!(store.courses()[0].name, "Web Programming");
    }

    #[test]
    fn test_empty_snapshot_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("courses.json"), "[]").unwrap();

        let store = store_in(&dir);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add_course();
        store.reset();

        assert_eq!(store.len(), 2);
        assert!(!dir.path().join("courses.json").exists());
    }
}
