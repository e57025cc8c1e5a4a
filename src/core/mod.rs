//! Core module for `GpaPlanner`

pub mod config;
pub mod gpa;
pub mod models;
pub mod parse;
pub mod progress;
pub mod recommend;
pub mod report;
pub mod store;

/// Returns the current version of the `GpaPlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
