//! Planned-course model

use super::Grade;
use serde::{Deserialize, Serialize};

/// Credit hours assigned to a newly added course.
pub const DEFAULT_COURSE_CREDITS: f64 = 3.0;

/// A course on the student's working plan
///
/// The name is free text and may be empty while the student is still
/// typing; credit hours are usually 1-4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedCourse {
    /// Course name (e.g., "Operating Systems"); may be empty
    pub name: String,

    /// Credit hours
    pub credits: f64,

    /// Expected or recorded letter grade
    pub grade: Grade,
}

impl PlannedCourse {
    /// Create a new planned course
    ///
    /// # Arguments
    /// * `name` - Course name (may be empty)
    /// * `credits` - Credit hours
    /// * `grade` - Letter grade
    #[must_use]
    pub fn new(name: impl Into<String>, credits: f64, grade: Grade) -> Self {
        Self {
            name: name.into(),
            credits,
            grade,
        }
    }

    /// Point value of this course's grade.
    #[must_use]
    pub const fn points(&self) -> f64 {
        self.grade.points()
    }

    /// Credit-weighted points contributed by this course.
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.credits * self.grade.points()
    }
}

impl Default for PlannedCourse {
    /// A blank entry the way the planner creates one: no name, three
    /// credits, best grade.
    fn default() -> Self {
        Self {
            name: String::new(),
            credits: DEFAULT_COURSE_CREDITS,
            grade: Grade::APlus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = PlannedCourse::new("Data Structures", 4.0, Grade::B0);

        assert_eq!(course.name, "Data Structures");
        assert!((course.credits - 4.0).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::B0);
    }

    #[test]
    fn test_default_entry() {
        let course = PlannedCourse::default();

        assert!(course.name.is_empty());
        assert!((course.credits - DEFAULT_COURSE_CREDITS).abs() < f64::EPSILON);
        assert_eq!(course.grade, Grade::APlus);
    }

    #[test]
    fn test_quality_points() {
        let course = PlannedCourse::new("Algorithms", 3.0, Grade::B0);
        assert!((course.quality_points() - 9.0).abs() < f64::EPSILON);
    }
}
