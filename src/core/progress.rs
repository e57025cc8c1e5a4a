//! Graduation-requirement progress
//!
//! Derivations over the requirement categories. Nothing here is stored;
//! every value is recomputed from the category list on each call.

use crate::core::models::RequirementCategory;

/// Progress snapshot for one requirement category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    /// Category identifier
    pub id: String,

    /// Display label
    pub label: String,

    /// Credit hours completed
    pub completed: f64,

    /// Credit hours required
    pub required: f64,

    /// Completion percentage, clamped to [0, 100]
    pub percent_complete: f64,

    /// Credit hours still missing, never negative
    pub remaining_credits: f64,
}

impl CategoryProgress {
    /// Whether this category is fully satisfied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining_credits <= 0.0 && self.required > 0.0
    }
}

/// Derive the progress snapshot for a single category.
#[must_use]
pub fn category_progress(category: &RequirementCategory) -> CategoryProgress {
    CategoryProgress {
        id: category.id.clone(),
        label: category.label.clone(),
        completed: category.completed,
        required: category.required,
        percent_complete: category.percent_complete(),
        remaining_credits: category.remaining_credits(),
    }
}

/// Derive progress snapshots for every category, in list order.
#[must_use]
pub fn progress_report(categories: &[RequirementCategory]) -> Vec<CategoryProgress> {
    categories.iter().map(category_progress).collect()
}

/// Overall completion percentage across all categories, clamped to
/// [0, 100]; 0 when nothing is required.
#[must_use]
pub fn overall_percent(categories: &[RequirementCategory]) -> f64 {
    let required: f64 = categories.iter().map(|c| c.required).sum();
    if required > 0.0 {
        let completed: f64 = categories.iter().map(|c| c.completed.min(c.required)).sum();
        (completed / required * 100.0).min(100.0)
    } else {
        0.0
    }
}
