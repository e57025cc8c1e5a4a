//! Courses command handler

use crate::args::CoursesSubcommand;
use gpa_planner::config::Config;
use gpa_planner::core::models::Grade;
use gpa_planner::core::store::AcademicSession;
use gpa_planner::core::{gpa, store::CoursePlanStore};
use gpa_planner::info;

/// Dispatch courses subcommands
pub fn run(subcommand: Option<CoursesSubcommand>, config: &Config) {
    let mut session = super::open_session(config);

    match subcommand.unwrap_or(CoursesSubcommand::List) {
        CoursesSubcommand::List => print_plan(&session.courses),
        CoursesSubcommand::Add => {
            let index = session.courses.add_course();
            info!("Added course entry at position {}", index + 1);
            println!("✓ Added course at position {}", index + 1);
            print_plan(&session.courses);
        }
        CoursesSubcommand::Remove { position } => handle_remove(&mut session, position),
        CoursesSubcommand::Set {
            position,
            name,
            credits,
            grade,
        } => handle_set(&mut session, position, name, credits, grade),
    }
}

fn handle_remove(session: &mut AcademicSession, position: usize) {
    let Some(index) = position.checked_sub(1) else {
        eprintln!("✗ Positions are 1-based");
        return;
    };

    if session.courses.remove_course(index) {
        println!("✓ Removed course at position {position}");
        print_plan(&session.courses);
    } else if session.courses.len() == 1 {
        // Invariant: the plan always keeps at least one entry
        eprintln!("✗ The plan must keep at least one course");
    } else {
        eprintln!("✗ No course at position {position}");
    }
}

fn handle_set(
    session: &mut AcademicSession,
    position: usize,
    name: Option<String>,
    credits: Option<String>,
    grade: Option<String>,
) {
    let Some(index) = position.checked_sub(1) else {
        eprintln!("✗ Positions are 1-based");
        return;
    };

    if index >= session.courses.len() {
        eprintln!("✗ No course at position {position}");
        return;
    }

    if name.is_none() && credits.is_none() && grade.is_none() {
        eprintln!("✗ Nothing to set; pass --name, --credits, or --grade");
        return;
    }

    if let Some(name) = name {
        session.courses.set_name(index, &name);
    }
    if let Some(credits) = credits {
        session.courses.set_credits(index, &credits);
    }
    if let Some(grade) = grade {
        match grade.parse::<Grade>() {
            Ok(grade) => {
                session.courses.set_grade(index, grade);
            }
            Err(e) => {
                eprintln!("✗ {e} (expected one of: A+, A0, B+, B0, C+, C0, D+, D0, F)");
                std::process::exit(1);
            }
        }
    }

    println!("✓ Updated course at position {position}");
    print_plan(&session.courses);
}

/// Print the plan with its projected GPA.
fn print_plan(courses: &CoursePlanStore) {
    println!("\n=== Course Plan ===\n");
    for (index, course) in courses.courses().iter().enumerate() {
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

    let list = courses.courses();
    println!(
        "\nPlanned GPA: {:.2}/4.5 over {:.0} credits (best case {:.2})",
        gpa::planned_gpa(list),
        gpa::total_credits(list),
        gpa::max_possible_gpa(list)
    );
}
