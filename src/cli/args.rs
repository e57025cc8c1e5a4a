//! CLI argument definitions for `GpaPlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_planner::config::ConfigOverrides;
use gpa_planner::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CoursesSubcommand {
    /// List the planned courses with the projected GPA.
    List,
    /// Append a blank course entry (3 credits, A+).
    Add,
    /// Remove the course at the given position.
    ///
    /// The sole remaining course cannot be removed; the plan always
    /// keeps at least one entry.
    Remove {
        /// Position of the course on the plan (1-based)
        #[arg(value_name = "POSITION")]
        position: usize,
    },
    /// Edit fields of the course at the given position.
    Set {
        /// Position of the course on the plan (1-based)
        #[arg(value_name = "POSITION")]
        position: usize,

        /// New course name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// New credit hours (non-numeric input coerces to 0)
        #[arg(long, value_name = "CREDITS")]
        credits: Option<String>,

        /// New letter grade (A+, A0, B+, B0, C+, C0, D+, D0, F)
        #[arg(long, value_name = "GRADE")]
        grade: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// Show the academic profile and its derived values.
    Show,
    /// Update one or more profile fields.
    Set {
        /// Cumulative GPA on record
        #[arg(long, value_name = "GPA")]
        current_gpa: Option<String>,

        /// GPA the student is aiming for
        #[arg(long, value_name = "GPA")]
        target_gpa: Option<String>,

        /// Credit hours already earned
        #[arg(long, value_name = "CREDITS")]
        total_credits: Option<String>,

        /// Credit hours required for graduation
        #[arg(long, value_name = "CREDITS")]
        required_credits: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RequirementsSubcommand {
    /// List requirement categories with their progress.
    List,
    /// Add a requirement category.
    Add {
        /// Display label for the new category
        #[arg(value_name = "LABEL")]
        label: String,
    },
    /// Remove the requirement category with the given id.
    ///
    /// The sole remaining category cannot be removed.
    Remove {
        /// Category id (shown by `requirements list`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Edit fields of the requirement category with the given id.
    Set {
        /// Category id (shown by `requirements list`)
        #[arg(value_name = "ID")]
        id: String,

        /// New display label
        #[arg(long, value_name = "LABEL")]
        label: Option<String>,

        /// Completed credit hours (non-numeric input coerces to 0)
        #[arg(long, value_name = "CREDITS")]
        completed: Option<String>,

        /// Required credit hours (non-numeric input coerces to 0)
        #[arg(long, value_name = "CREDITS")]
        required: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the planned-course list.
    ///
    /// If no subcommand is provided, lists the plan.
    Courses {
        #[command(subcommand)]
        subcommand: Option<CoursesSubcommand>,
    },
    /// Manage the academic profile.
    ///
    /// If no subcommand is provided, shows the profile.
    Profile {
        #[command(subcommand)]
        subcommand: Option<ProfileSubcommand>,
    },
    /// Manage graduation-requirement categories.
    ///
    /// If no subcommand is provided, lists the categories.
    Requirements {
        #[command(subcommand)]
        subcommand: Option<RequirementsSubcommand>,
    },
    /// Show retake and similar-course recommendations.
    Advise,
    /// Show the full academic summary.
    Summary,
    /// Generate an academic summary report file.
    Report {
        /// Output file path (optional; defaults to the configured
        /// reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
    /// Reset all stored academic data to defaults (requires confirmation).
    Reset,
}

#[derive(Parser, Debug)]
#[command(
    name = "gpaplanner",
    about = "GpaPlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can
    /// be applied to the loaded configuration. Short-form flags (e.g.,
    /// `--data-dir`) take precedence over long-form flags (e.g.,
    /// `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
