//! # Validate Command
//!
//! Loads the catalog, runs the authoring rules, and prints the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use lessonlint_core::{load_catalog, validate_catalog};

use crate::report::Report;
use crate::DEFAULT_CATALOG_PATH;

/// Arguments for catalog validation.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the curriculum JSON file.
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,
}

/// Validate the catalog named by `args` and write the report to `out`.
///
/// Returns the exit code for the report. A catalog that cannot be loaded is
/// an error, not a report, and nothing is written.
pub fn run_validate(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let report = check_catalog(&args.catalog)?;
    writeln!(out, "{report}").context("failed to write report")?;
    Ok(report.exit_code())
}

/// Load and validate the catalog at `path` without printing.
pub fn check_catalog(path: &Path) -> Result<Report> {
    let catalog = load_catalog(path).context("failed to load curriculum catalog")?;
    let violations = validate_catalog(&catalog);
    let report = Report::new(&catalog, violations);

    match &report {
        Report::Failed(violations) => tracing::info!(
            path = %path.display(),
            violations = violations.len(),
            "catalog failed validation"
        ),
        Report::Passed { lesson_count, .. } => tracing::info!(
            path = %path.display(),
            lessons = lesson_count,
            "catalog passed validation"
        ),
    }
    Ok(report)
}
