//! Report generation for the academic summary
//!
//! Renders a snapshot of the session's derived values (projected GPA,
//! recommendations, requirement progress) to a file.

pub mod markdown;

use crate::core::gpa;
use crate::core::models::{AcademicProfile, PlannedCourse};
use crate::core::progress::{self, CategoryProgress};
use crate::core::recommend::{
    recommend_retakes, recommend_similar, BuiltinRules, CourseSuggestion, RetakeCandidate,
};
use crate::core::store::AcademicSession;
use std::error::Error;
use std::path::Path;

pub use markdown::MarkdownReporter;

/// Data context for report generation
///
/// Aggregates every derived value a report needs, computed once from the
/// session so the generators stay pure formatting.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Planned courses, in plan order
    pub courses: &'a [PlannedCourse],
    /// Typed academic profile
    pub profile: AcademicProfile,
    /// Ranked retake candidates
    pub retakes: Vec<RetakeCandidate>,
    /// Similar-course suggestions
    pub suggestions: Vec<CourseSuggestion>,
    /// Per-category requirement progress
    pub requirements: Vec<CategoryProgress>,
}

impl<'a> ReportContext<'a> {
    /// Compute the full context from a loaded session.
    #[must_use]
    pub fn from_session(session: &'a AcademicSession) -> Self {
        let profile = session.profile.profile();
        let courses = session.courses.courses();
        Self {
            courses,
            profile,
            retakes: recommend_retakes(courses, profile.target_gpa),
            suggestions: recommend_similar(courses, &BuiltinRules),
            requirements: progress::progress_report(&session.requirements.categories()),
        }
    }

    /// Projected GPA of the course plan.
    #[must_use]
    pub fn planned_gpa(&self) -> f64 {
        gpa::planned_gpa(self.courses)
    }

    /// Total credit hours on the plan.
    #[must_use]
    pub fn plan_credits(&self) -> f64 {
        gpa::total_credits(self.courses)
    }

    /// Distance between the planned GPA and the target, never negative.
    #[must_use]
    pub fn gpa_gap(&self) -> f64 {
        self.profile.gpa_gap(self.planned_gpa())
    }

    /// Overall requirement completion percentage, clamped to [0, 100].
    #[must_use]
    pub fn overall_requirement_percent(&self) -> f64 {
        let required: f64 = self.requirements.iter().map(|c| c.required).sum();
        if required > 0.0 {
            let completed: f64 = self
                .requirements
                .iter()
                .map(|c| c.completed.min(c.required))
                .sum();
            (completed / required * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// Trait for rendering an academic summary in a specific format
pub trait ReportGenerator {
    /// Render the context and write the report to `output_path`.
    ///
    /// # Errors
    /// Returns an error if the report cannot be written
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// File extension for this format (without the dot).
    fn extension(&self) -> &'static str;
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown (renders well on GitHub and in editors)
    Markdown,
}

impl ReportFormat {
    /// Parse a format name from user input.
    ///
    /// # Returns
    /// `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// The generator implementing this format.
    #[must_use]
    pub fn generator(self) -> Box<dyn ReportGenerator> {
        match self {
            Self::Markdown => Box::new(MarkdownReporter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_context_from_default_session() {
        let dir = TempDir::new().unwrap();
        let session = AcademicSession::load(&Storage::open(dir.path()));
        let ctx = ReportContext::from_session(&session);

        // Default plan: A+ and B+ at 3 credits each
        assert!((ctx.planned_gpa() - 4.0).abs() < 1e-9);
        assert!((ctx.plan_credits() - 6.0).abs() < f64::EPSILON);
        assert_eq!(ctx.requirements.len(), 3);
        // B+ sits below the default 4.0 target
        assert_eq!(ctx.retakes.len(), 1);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(
            ReportFormat::from_name("markdown"),
            Some(ReportFormat::Markdown)
        );
        assert_eq!(ReportFormat::from_name("MD"), Some(ReportFormat::Markdown));
        assert!(ReportFormat::from_name("pdf").is_none());
    }
}
