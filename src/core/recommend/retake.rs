//! Retake recommender
//!
//! Ranks planned courses by how much the plan's weighted average would
//! rise if that one course were retaken at the maximum grade.

use crate::core::gpa;
use crate::core::models::{Grade, PlannedCourse, MAX_GRADE_POINTS};

/// Maximum number of retake candidates returned.
pub const MAX_RETAKE_RESULTS: usize = 3;

/// Name shown for a course the student has not titled yet.
const UNTITLED_COURSE: &str = "Untitled course";

/// A course worth retaking, with its projected point gain
#[derive(Debug, Clone, PartialEq)]
pub struct RetakeCandidate {
    /// Course name (or a placeholder when the entry is unnamed)
    pub name: String,

    /// Grade currently on the plan
    pub current_grade: Grade,

    /// Credit hours of the course
    pub credits: f64,

    /// Projected rise in the plan's weighted average
    pub gain: f64,
}

/// Rank courses by the single-course gain of retaking them at `A+`.
///
/// For each course whose points sit strictly below `target_gpa`, the gain
/// is `(4.5 - points) x credits / total plan credits`: the rise in the
/// overall weighted average if only that course were upgraded and every
/// other grade held fixed. Gains from retaking several courses at once do
/// not simply add up, so treat each entry as a per-course estimate rather
/// than a combined projection.
///
/// Non-positive gains are dropped, the result is sorted by descending
/// gain (ties keep plan order), and at most [`MAX_RETAKE_RESULTS`]
/// entries are returned. A plan with zero total credit hours yields an
/// empty list.
#[must_use]
pub fn recommend_retakes(courses: &[PlannedCourse], target_gpa: f64) -> Vec<RetakeCandidate> {
    let total = gpa::total_credits(courses);
    if total <= 0.0 {
        return Vec::new();
    }

    let mut candidates: Vec<RetakeCandidate> = courses
        .iter()
        .filter(|course| course.points() < target_gpa)
        .filter_map(|course| {
            let gain = (MAX_GRADE_POINTS - course.points()) * course.credits / total;
            if gain <= 0.0 {
                return None;
            }
            let name = if course.name.is_empty() {
                UNTITLED_COURSE.to_string()
            } else {
                course.name.clone()
            };
            Some(RetakeCandidate {
                name,
                current_grade: course.grade,
                credits: course.credits,
                gain,
            })
        })
        .collect();

    // sort_by is stable, so equal gains keep their plan order
    candidates.sort_by(|a, b| b.gain.partial_cmp(&a.gain).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(MAX_RETAKE_RESULTS);
    candidates
}
