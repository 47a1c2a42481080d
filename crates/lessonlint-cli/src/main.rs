//! # lessonlint entry point
//!
//! Parses arguments, installs logging, and maps the validation outcome to
//! the process exit code.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lessonlint_cli::validate::{run_validate, ValidateArgs};
use lessonlint_cli::EXIT_LOAD_FAILURE;

/// Validate that every lesson in the curriculum catalog meets authoring rules.
#[derive(Parser, Debug)]
#[command(name = "lessonlint", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Log filter comes from RUST_LOG; stdout is reserved for the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(catalog = %cli.validate.catalog.display(), "lessonlint starting");

    ExitCode::from(run(&cli, &mut std::io::stdout().lock()))
}

/// Run one validation, writing the report to `out`. A load failure goes to
/// stderr and leaves `out` untouched.
fn run(cli: &Cli, out: &mut impl Write) -> u8 {
    match run_validate(&cli.validate, out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            EXIT_LOAD_FAILURE
        }
    }
}
