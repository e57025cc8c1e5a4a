//! Report command handler

use gpa_planner::config::Config;
use gpa_planner::core::report::{ReportContext, ReportFormat};
use gpa_planner::{error, info};
use std::path::{Path, PathBuf};

/// Generate an academic summary report file.
///
/// # Arguments
/// * `output` - Optional output path; defaults to the configured reports directory
/// * `format` - Report format name (markdown/md)
/// * `config` - Configuration containing the default reports directory
pub fn run(output: Option<&Path>, format: &str, config: &Config) {
    let Some(format) = ReportFormat::from_name(format) else {
        eprintln!("✗ Unknown report format: '{format}' (expected: markdown)");
        std::process::exit(1);
    };

    let session = super::open_session(config);
    let ctx = ReportContext::from_session(&session);
    let generator = format.generator();

    let output_path: PathBuf = if let Some(output) = output {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        if let Err(e) = std::fs::create_dir_all(&reports_dir) {
            eprintln!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            );
            return;
        }
        reports_dir.join(format!("academic_summary.{}", generator.extension()))
    };

    match generator.generate(&ctx, &output_path) {
        Ok(()) => {
            println!("✓ Report generated: {}", output_path.display());
            info!("Report written to: {}", output_path.display());
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ Failed to write report to {}: {e}", output_path.display());
        }
    }
}
