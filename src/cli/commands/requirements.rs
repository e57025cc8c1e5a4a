//! Requirements command handler

use crate::args::RequirementsSubcommand;
use gpa_planner::config::Config;
use gpa_planner::core::progress;
use gpa_planner::core::store::{AcademicSession, RequirementStore};

/// Dispatch requirements subcommands
pub fn run(subcommand: Option<RequirementsSubcommand>, config: &Config) {
    let mut session = super::open_session(config);

    match subcommand.unwrap_or(RequirementsSubcommand::List) {
        RequirementsSubcommand::List => print_progress(&session.requirements),
        RequirementsSubcommand::Add { label } => {
            let id = session.requirements.add_category(&label);
            println!("✓ Added requirement category '{label}' (id: {id})");
            print_progress(&session.requirements);
        }
        RequirementsSubcommand::Remove { id } => handle_remove(&mut session, &id),
        RequirementsSubcommand::Set {
            id,
            label,
            completed,
            required,
        } => handle_set(&mut session, &id, label, completed, required),
    }
}

fn handle_remove(session: &mut AcademicSession, id: &str) {
    if session.requirements.remove_category(id) {
        println!("✓ Removed requirement category '{id}'");
        print_progress(&session.requirements);
    } else if session.requirements.len() == 1 {
        // Invariant: at least one category always remains
        eprintln!("✗ At least one requirement category must remain");
    } else {
        eprintln!("✗ No requirement category with id '{id}'");
    }
}

fn handle_set(
    session: &mut AcademicSession,
    id: &str,
    label: Option<String>,
    completed: Option<String>,
    required: Option<String>,
) {
    if label.is_none() && completed.is_none() && required.is_none() {
        eprintln!("✗ Nothing to set; pass --label, --completed, or --required");
        return;
    }

    let mut found = true;
    if let Some(label) = label {
        found &= session.requirements.set_label(id, &label);
    }
    if let Some(completed) = completed {
        found &= session.requirements.set_completed(id, &completed);
    }
    if let Some(required) = required {
        found &= session.requirements.set_required(id, &required);
    }

    if found {
        println!("✓ Updated requirement category '{id}'");
        print_progress(&session.requirements);
    } else {
        eprintln!("✗ No requirement category with id '{id}'");
    }
}

/// Print per-category progress with a simple completion bar.
fn print_progress(requirements: &RequirementStore) {
    let categories = requirements.categories();
    let report = progress::progress_report(&categories);

    println!("\n=== Graduation Requirements ===\n");
    for category in &report {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (category.percent_complete / 10.0).round() as usize;
        let bar: String = "#".repeat(filled) + &"-".repeat(10 - filled);
        let status = if category.is_complete() {
            "complete".to_string()
        } else {
            format!("{:.0} credits short", category.remaining_credits)
        };
        println!(
            "{:<20} [{bar}] {:>3.0}%  {:.0}/{:.0}  ({status})  id: {}",
            category.label,
            category.percent_complete,
            category.completed,
            category.required,
            category.id
        );
    }

    println!(
        "\nOverall: {:.0}% complete",
        progress::overall_percent(&categories)
    );
}
