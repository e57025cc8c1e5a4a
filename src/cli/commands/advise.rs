//! Advise command handler

use gpa_planner::config::Config;
use gpa_planner::core::recommend::{recommend_retakes, recommend_similar, BuiltinRules};

/// Print retake and similar-course recommendations for the current plan.
pub fn run(config: &Config) {
    let session = super::open_session(config);
    let profile = session.profile.profile();
    let courses = session.courses.courses();

    println!("\n=== Retake Recommendations ===\n");
    let retakes = recommend_retakes(courses, profile.target_gpa);
    if retakes.is_empty() {
        println!("No retake candidates: every course already meets the target.");
    } else {
        // Per-course estimates; retaking several courses at once does not
        // add the gains together
        for candidate in &retakes {
            println!(
                "{}  (currently {} over {:.0} credits)  +{:.2} GPA",
                candidate.name, candidate.current_grade, candidate.credits, candidate.gain
            );
        }
    }

    println!("\n=== Similar-Course Suggestions ===\n");
    let suggestions = recommend_similar(courses, &BuiltinRules);
    if suggestions.is_empty() {
        println!("No suggestions: no low-grade course matched the catalog.");
    } else {
        for suggestion in &suggestions {
            println!(
                "{}  ({}, {:.0} credits, {})\n    {}",
                suggestion.name,
                suggestion.department,
                suggestion.credits,
                suggestion.difficulty,
                suggestion.rationale
            );
        }
    }
}
