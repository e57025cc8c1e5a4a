//! Reset command handler

use gpa_planner::config::Config;
use std::io::{self, Write};

/// Reset all stored academic data to defaults, after confirmation.
pub fn run(config: &Config) {
    // Ask for confirmation
    print!("Reset courses, profile, and requirements to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        let mut session = super::open_session(config);
        session.reset();
        println!("✓ Academic data reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
