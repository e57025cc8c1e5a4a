//! Profile command handler

use crate::args::ProfileSubcommand;
use gpa_planner::config::Config;
use gpa_planner::core::gpa;
use gpa_planner::core::store::AcademicSession;

/// Dispatch profile subcommands
pub fn run(subcommand: Option<ProfileSubcommand>, config: &Config) {
    let mut session = super::open_session(config);

    match subcommand.unwrap_or(ProfileSubcommand::Show) {
        ProfileSubcommand::Show => print_profile(&session),
        ProfileSubcommand::Set {
            current_gpa,
            target_gpa,
            total_credits,
            required_credits,
        } => {
            if current_gpa.is_none()
                && target_gpa.is_none()
                && total_credits.is_none()
                && required_credits.is_none()
            {
                eprintln!(
                    "✗ Nothing to set; pass --current-gpa, --target-gpa, --total-credits, or --required-credits"
                );
                return;
            }

            if let Some(value) = current_gpa {
                session.profile.set_current_gpa(&value);
            }
            if let Some(value) = target_gpa {
                session.profile.set_target_gpa(&value);
            }
            if let Some(value) = total_credits {
                session.profile.set_total_credits(&value);
            }
            if let Some(value) = required_credits {
                session.profile.set_required_credits(&value);
            }

            println!("✓ Profile updated");
            print_profile(&session);
        }
    }
}

/// Print the profile with its derived values.
fn print_profile(session: &AcademicSession) {
    let profile = session.profile.profile();
    let planned = gpa::planned_gpa(session.courses.courses());

    println!("\n=== Academic Profile ===\n");
    println!("Current GPA:       {:.2}", profile.current_gpa);
    println!("Planned GPA:       {planned:.2}");
    println!("Target GPA:        {:.2}", profile.target_gpa);
    println!("Gap to target:     {:.2}", profile.gpa_gap(planned));
    println!("Credits earned:    {:.0}", profile.total_credits);
    println!("Credits required:  {:.0}", profile.required_credits);
    println!("Credits remaining: {:.0}", profile.remaining_credits());
}
