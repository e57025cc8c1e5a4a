//! Markdown report generator
//!
//! Renders the academic summary in Markdown. Reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("templates/summary.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Substitute standing metrics
        output = output.replace("{{current_gpa}}", &format!("{:.2}", ctx.profile.current_gpa));
        output = output.replace("{{planned_gpa}}", &format!("{:.2}", ctx.planned_gpa()));
        output = output.replace("{{target_gpa}}", &format!("{:.2}", ctx.profile.target_gpa));
        output = output.replace("{{gpa_gap}}", &format!("{:.2}", ctx.gpa_gap()));
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.0}", ctx.profile.total_credits),
        );
        output = output.replace(
            "{{required_credits}}",
            &format!("{:.0}", ctx.profile.required_credits),
        );
        output = output.replace(
            "{{remaining_credits}}",
            &format!("{:.0}", ctx.profile.remaining_credits()),
        );
        output = output.replace("{{plan_credits}}", &format!("{:.0}", ctx.plan_credits()));
        output = output.replace(
            "{{overall_percent}}",
            &format!("{:.0}", ctx.overall_requirement_percent()),
        );

        output = output.replace("{{course_table}}", &Self::generate_course_table(ctx));
        output = output.replace("{{retake_section}}", &Self::generate_retake_section(ctx));
        output = output.replace("{{similar_section}}", &Self::generate_similar_section(ctx));
        output = output.replace(
            "{{requirement_table}}",
            &Self::generate_requirement_table(ctx),
        );

        output
    }

    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::from("| Course | Credits | Grade | Points |\n");
        table.push_str("|--------|---------|-------|--------|\n");
        for course in ctx.courses {
            let name = if course.name.is_empty() {
                "(untitled)"
            } else {
                course.name.as_str()
            };
            let _ = writeln!(
                table,
                "| {name} | {:.0} | {} | {:.1} |",
                course.credits,
                course.grade,
                course.points()
            );
        }
        table
    }

    fn generate_retake_section(ctx: &ReportContext) -> String {
        if ctx.retakes.is_empty() {
            return "No retake candidates: every course already meets the target.".to_string();
        }

        let mut table = String::from("| Course | Current Grade | Credits | Gain |\n");
        table.push_str("|--------|---------------|---------|------|\n");
        for candidate in &ctx.retakes {
            let _ = writeln!(
                table,
                "| {} | {} | {:.0} | +{:.2} |",
                candidate.name, candidate.current_grade, candidate.credits, candidate.gain
            );
        }
        table
    }

    fn generate_similar_section(ctx: &ReportContext) -> String {
        if ctx.suggestions.is_empty() {
            return "No suggestions: no low-grade course matched the catalog.".to_string();
        }

        let mut table = String::from("| Course | Department | Credits | Difficulty | Why |\n");
        table.push_str("|--------|------------|---------|------------|-----|\n");
        for suggestion in &ctx.suggestions {
            let _ = writeln!(
                table,
                "| {} | {} | {:.0} | {} | {} |",
                suggestion.name,
                suggestion.department,
                suggestion.credits,
                suggestion.difficulty,
                suggestion.rationale
            );
        }
        table
    }

    fn generate_requirement_table(ctx: &ReportContext) -> String {
        let mut table = String::from("| Category | Completed | Required | Progress | Remaining |\n");
        table.push_str("|----------|-----------|----------|----------|-----------|\n");
        for category in &ctx.requirements {
            let _ = writeln!(
                table,
                "| {} | {:.0} | {:.0} | {:.0}% | {:.0} |",
                category.label,
                category.completed,
                category.required,
                category.percent_complete,
                category.remaining_credits
            );
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let rendered = self.render_template(ctx);
        fs::write(output_path, rendered)?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{AcademicSession, Storage};
    use tempfile::TempDir;

    #[test]
    fn test_rendered_report_has_no_placeholders_left() {
        let dir = TempDir::new().unwrap();
        let session = AcademicSession::load(&Storage::open(dir.path()));
        let ctx = ReportContext::from_session(&session);

        let rendered = MarkdownReporter::new().render_template(&ctx);
        assert!(!rendered.contains("{{"));
        assert!(rendered.contains("# Academic Summary"));
        assert!(rendered.contains("Web Programming"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let session = AcademicSession::load(&Storage::open(dir.path()));
        let ctx = ReportContext::from_session(&session);

        let out = dir.path().join("summary.md");
        MarkdownReporter::new().generate(&ctx, &out).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("Graduation Requirements"));
    }
}
