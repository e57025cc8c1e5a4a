//! Academic-profile model

/// The student's academic standing, already coerced to numbers
///
/// This is the typed view handed to the calculators; the raw form text
/// lives in the profile store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcademicProfile {
    /// Cumulative GPA on record (0.0-4.5)
    pub current_gpa: f64,

    /// GPA the student is aiming for (0.0-4.5)
    pub target_gpa: f64,

    /// Credit hours already earned
    pub total_credits: f64,

    /// Credit hours required for graduation
    pub required_credits: f64,
}

impl AcademicProfile {
    /// Credit hours still needed for graduation, never negative.
    #[must_use]
    pub fn remaining_credits(&self) -> f64 {
        (self.required_credits - self.total_credits).max(0.0)
    }

    /// How far the planned GPA sits below the target, never negative.
    ///
    /// # Arguments
    /// * `planned_gpa` - The projected GPA from the course plan
    #[must_use]
    pub fn gpa_gap(&self, planned_gpa: f64) -> f64 {
        (self.target_gpa - planned_gpa).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_credits() {
        let profile = AcademicProfile {
            current_gpa: 3.4,
            target_gpa: 4.0,
            total_credits: 98.0,
            required_credits: 130.0,
        };

        assert!((profile.remaining_credits() - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remaining_credits_clamps_at_zero() {
        let profile = AcademicProfile {
            current_gpa: 3.4,
            target_gpa: 4.0,
            total_credits: 140.0,
            required_credits: 130.0,
        };

        assert!(profile.remaining_credits().abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_gap() {
        let profile = AcademicProfile {
            current_gpa: 3.4,
            target_gpa: 4.0,
            total_credits: 0.0,
            required_credits: 130.0,
        };

        assert!((profile.gpa_gap(3.45) - 0.55).abs() < 1e-9);
        assert!(profile.gpa_gap(4.3).abs() < f64::EPSILON);
    }
}
