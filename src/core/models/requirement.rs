//! Graduation-requirement model

/// A named bucket of required credit hours (e.g., major-required),
/// already coerced to numbers
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementCategory {
    /// Opaque unique token identifying the category
    pub id: String,

    /// Display label (e.g., "Major Required")
    pub label: String,

    /// Credit hours completed toward this category
    pub completed: f64,

    /// Credit hours this category requires
    pub required: f64,
}

impl RequirementCategory {
    /// Completion percentage, clamped to [0, 100].
    ///
    /// A category that requires nothing reports 0 rather than dividing
    /// by zero.
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        if self.required > 0.0 {
            (self.completed / self.required * 100.0).min(100.0)
        } else {
            0.0
        }
    }

    /// Credit hours still missing from this category, never negative.
    #[must_use]
    pub fn remaining_credits(&self) -> f64 {
        (self.required - self.completed).max(0.0)
    }
}
