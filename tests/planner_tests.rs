//! Integration tests for the planning calculators working over the stores

use gpa_planner::core::gpa::{max_possible_gpa, planned_gpa, total_credits};
use gpa_planner::core::models::{Grade, MAX_GRADE_POINTS};
use gpa_planner::core::progress;
use gpa_planner::core::recommend::{recommend_retakes, recommend_similar, BuiltinRules};
use gpa_planner::core::store::{AcademicSession, Storage};
use tempfile::TempDir;

fn session_in(dir: &TempDir) -> AcademicSession {
    AcademicSession::load(&Storage::open(dir.path()))
}

/// Rebuild the plan to exactly the (name, credits, grade) triples given.
fn set_plan(session: &mut AcademicSession, plan: &[(&str, &str, Grade)]) {
    while session.courses.len() > 1 {
        session.courses.remove_course(0);
    }
    for (index, (name, credits, grade)) in plan.iter().enumerate() {
        if index >= session.courses.len() {
            session.courses.add_course();
        }
        session.courses.set_name(index, name);
        session.courses.set_credits(index, credits);
        session.courses.set_grade(index, *grade);
    }
}

#[test]
fn test_planned_gpa_scenario() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    set_plan(
        &mut session,
        &[
            ("Web Programming", "3", Grade::APlus),
            ("Database Systems", "3", Grade::B0),
        ],
    );

    // (3 x 4.5 + 3 x 3.0) / 6 = 3.75
    assert!((planned_gpa(session.courses.courses()) - 3.75).abs() < 1e-9);
    assert!((total_credits(session.courses.courses()) - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_retake_gain_scenario() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    set_plan(&mut session, &[("Operating Systems", "3", Grade::C0)]);
    session.profile.set_target_gpa("4.0");

    let target = session.profile.profile().target_gpa;
    let retakes = recommend_retakes(session.courses.courses(), target);

    assert_eq!(retakes.len(), 1);
    // (4.5 - 2.0) x 3 / 3 = 2.5
    assert!((retakes[0].gain - 2.5).abs() < 1e-9);
}

#[test]
fn test_gpa_always_within_scale() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    let plans: [&[(&str, &str, Grade)]; 4] = [
        &[("A", "3", Grade::F)],
        &[("A", "1", Grade::APlus), ("B", "4", Grade::D0)],
        &[("A", "0", Grade::B0)],
        &[("A", "junk", Grade::CPlus), ("B", "2", Grade::A0)],
    ];

    for plan in plans {
        set_plan(&mut session, plan);
        let gpa = planned_gpa(session.courses.courses());
        assert!((0.0..=MAX_GRADE_POINTS).contains(&gpa));
        assert!(gpa <= max_possible_gpa(session.courses.courses()) + 1e-9);
    }
}

#[test]
fn test_zero_credit_plan_disables_recommendations() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    // Non-numeric credit text coerces to 0, leaving the plan creditless
    set_plan(&mut session, &[("Mystery", "", Grade::F)]);

    assert!(planned_gpa(session.courses.courses()).abs() < f64::EPSILON);
    assert!(recommend_retakes(session.courses.courses(), 4.0).is_empty());
}

#[test]
fn test_retake_ranking_over_edited_plan() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    set_plan(
        &mut session,
        &[
            ("Data Structures", "3", Grade::CPlus),
            ("Algorithms", "3", Grade::B0),
            ("Operating Systems", "3", Grade::C0),
            ("Compilers", "3", Grade::A0),
            ("Databases", "3", Grade::F),
        ],
    );

    let retakes = recommend_retakes(session.courses.courses(), 4.0);

    // Capped at three, A0 excluded, worst grades first
    assert_eq!(retakes.len(), 3);
    assert_eq!(retakes[0].name, "Databases");
    assert_eq!(retakes[1].name, "Operating Systems");
    assert_eq!(retakes[2].name, "Data Structures");
    assert!(retakes.windows(2).all(|p| p[0].gain >= p[1].gain));
    assert!(retakes.iter().all(|c| c.current_grade != Grade::A0));
}

#[test]
fn test_similar_suggestions_follow_low_grades() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    set_plan(
        &mut session,
        &[
            ("Web Programming", "3", Grade::C0),
            ("Computer Networks", "3", Grade::DPlus),
        ],
    );

    let suggestions = recommend_similar(session.courses.courses(), &BuiltinRules);

    // programming rule first, then the network rule fills the cap
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].name, "Advanced Programming");
    assert_eq!(suggestions[1].name, "Software Engineering");
    assert_eq!(suggestions[2].name, "Network Security");
    assert!((suggestions[2].credits - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_requirement_overshoot_scenario() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    assert!(session.requirements.set_completed("majorCore", "40"));
    assert!(session.requirements.set_required("majorCore", "30"));

    let categories = session.requirements.categories();
    let report = progress::progress_report(&categories);
    let major_core = report.iter().find(|c| c.id == "majorCore").unwrap();

    assert!((major_core.percent_complete - 100.0).abs() < f64::EPSILON);
    assert!(major_core.remaining_credits.abs() < f64::EPSILON);
}

#[test]
fn test_structural_invariants_hold() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);

    // Shrink both lists to a single entry, then try to empty them
    while session.courses.len() > 1 {
        session.courses.remove_course(0);
    }
    assert!(!session.courses.remove_course(0));
    assert_eq!(session.courses.len(), 1);

    let ids: Vec<String> = session
        .requirements
        .records()
        .iter()
        .map(|r| r.id.clone())
        .collect();
    for id in &ids {
        session.requirements.remove_category(id);
    }
    assert_eq!(session.requirements.len(), 1);
}
