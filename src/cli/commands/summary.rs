//! Summary command handler

use gpa_planner::config::Config;
use gpa_planner::core::report::ReportContext;

/// Print the full academic summary to the terminal.
pub fn run(config: &Config) {
    let session = super::open_session(config);
    let ctx = ReportContext::from_session(&session);

    println!("\n=== Academic Summary ===\n");
    println!(
        "Current GPA {:.2}  |  Planned GPA {:.2}/4.5  |  Target {:.2}  |  Gap {:.2}",
        ctx.profile.current_gpa,
        ctx.planned_gpa(),
        ctx.profile.target_gpa,
        ctx.gpa_gap()
    );
    println!(
        "Credits: {:.0} earned of {:.0} required ({:.0} remaining); {:.0} planned this term",
        ctx.profile.total_credits,
        ctx.profile.required_credits,
        ctx.profile.remaining_credits(),
        ctx.plan_credits()
    );

    println!("\n--- Plan ---");
    for (index, course) in ctx.courses.iter().enumerate() {
        let name = if course.name.is_empty() {
            "(untitled)"
        } else {
            course.name.as_str()
        };
        println!(
            "{:>3}. {name}  [{:.0} cr, {}]",
            index + 1,
            course.credits,
            course.grade
        );
    }

    println!("\n--- Retake candidates ---");
    if ctx.retakes.is_empty() {
        println!("none");
    } else {
        for candidate in &ctx.retakes {
            println!(
                "{}  ({}, {:.0} cr)  +{:.2}",
                candidate.name, candidate.current_grade, candidate.credits, candidate.gain
            );
        }
    }

    println!("\n--- Similar-course suggestions ---");
    if ctx.suggestions.is_empty() {
        println!("none");
    } else {
        for suggestion in &ctx.suggestions {
            println!(
                "{}  ({}, {})",
                suggestion.name, suggestion.department, suggestion.difficulty
            );
        }
    }

    println!(
        "\n--- Requirements ({:.0}% complete) ---",
        ctx.overall_requirement_percent()
    );
    for category in &ctx.requirements {
        println!(
            "{:<20} {:.0}/{:.0} ({:.0}%)",
            category.label, category.completed, category.required, category.percent_complete
        );
    }
}
