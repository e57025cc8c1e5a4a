//! Grade-point-average calculator
//!
//! Pure functions over the planned-course list. Every function here is
//! total: an empty plan or a plan with zero credit hours yields 0 rather
//! than an error.

use crate::core::models::{PlannedCourse, MAX_GRADE_POINTS};

/// Sum of credit hours across the plan.
#[must_use]
pub fn total_credits(courses: &[PlannedCourse]) -> f64 {
    courses.iter().map(|c| c.credits).sum()
}

/// Sum of credit-weighted grade points across the plan.
#[must_use]
pub fn quality_points(courses: &[PlannedCourse]) -> f64 {
    courses.iter().map(PlannedCourse::quality_points).sum()
}

/// Credit-weighted mean of per-course grade points.
///
/// Returns 0 when the plan carries no credit hours.
///
/// # Examples
/// ```
/// use gpa_planner::core::gpa::planned_gpa;
/// use gpa_planner::core::models::{Grade, PlannedCourse};
///
/// let courses = vec![
///     PlannedCourse::new("Web Programming", 3.0, Grade::APlus),
///     PlannedCourse::new("Database Systems", 3.0, Grade::B0),
/// ];
/// assert!((planned_gpa(&courses) - 3.75).abs() < 1e-9);
/// ```
#[must_use]
pub fn planned_gpa(courses: &[PlannedCourse]) -> f64 {
    let credits = total_credits(courses);
    if credits > 0.0 {
        quality_points(courses) / credits
    } else {
        0.0
    }
}

/// The GPA this plan would reach with every grade at its maximum.
///
/// Uses the same credit weighting as [`planned_gpa`] with every course's
/// points replaced by [`MAX_GRADE_POINTS`]; 0 when the plan carries no
/// credit hours.
#[must_use]
pub fn max_possible_gpa(courses: &[PlannedCourse]) -> f64 {
    let credits = total_credits(courses);
    if credits > 0.0 {
        courses
            .iter()
            .map(|c| c.credits * MAX_GRADE_POINTS)
            .sum::<f64>()
            / credits
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    #[test]
    fn test_weighted_mean() {
        let courses = vec![
            PlannedCourse::new("Web Programming", 3.0, Grade::APlus),
            PlannedCourse::new("Database Systems", 3.0, Grade::B0),
        ];

        // (3 x 4.5 + 3 x 3.0) / 6 = 3.75
        assert!((planned_gpa(&courses) - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_unequal_credit_weighting() {
        let courses = vec![
            PlannedCourse::new("Seminar", 1.0, Grade::F),
            PlannedCourse::new("Capstone", 4.0, Grade::APlus),
        ];

        // (1 x 0.0 + 4 x 4.5) / 5 = 3.6
        assert!((planned_gpa(&courses) - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_credit_plan_is_zero() {
        let courses = vec![PlannedCourse::new("Audit", 0.0, Grade::APlus)];

        assert!(planned_gpa(&courses).abs() < f64::EPSILON);
        assert!(max_possible_gpa(&courses).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_plan_is_zero() {
        assert!(planned_gpa(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_stays_in_range() {
        let courses = vec![
            PlannedCourse::new("A", 2.0, Grade::F),
            PlannedCourse::new("B", 3.0, Grade::D0),
            PlannedCourse::new("C", 1.0, Grade::CPlus),
            PlannedCourse::new("D", 4.0, Grade::APlus),
        ];

        let gpa = planned_gpa(&courses);
        assert!((0.0..=MAX_GRADE_POINTS).contains(&gpa));
    }

    #[test]
    fn test_max_possible_is_ceiling() {
        let courses = vec![
            PlannedCourse::new("A", 3.0, Grade::C0),
            PlannedCourse::new("B", 2.0, Grade::B0),
        ];

        assert!((max_possible_gpa(&courses) - MAX_GRADE_POINTS).abs() < 1e-9);
        assert!(planned_gpa(&courses) <= max_possible_gpa(&courses));
    }
}
