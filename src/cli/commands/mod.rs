//! Command handlers

pub mod advise;
pub mod config;
pub mod courses;
pub mod profile;
pub mod report;
pub mod requirements;
pub mod reset;
pub mod summary;

use gpa_planner::config::Config;
use gpa_planner::core::store::{AcademicSession, Storage};

/// Open the academic session using the configured data directory.
///
/// Falls back to the platform default when the config carries no
/// data directory.
pub fn open_session(config: &Config) -> AcademicSession {
    let storage = if config.paths.data_dir.is_empty() {
        Storage::open(Storage::default_root())
    } else {
        Storage::open(config.paths.data_dir.as_str())
    };
    AcademicSession::load(&storage)
}
