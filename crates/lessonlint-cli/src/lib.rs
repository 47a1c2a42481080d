//! # lessonlint-cli: Curriculum Catalog Checker
//!
//! Provides the `lessonlint` command. It loads a catalog, validates every
//! lesson against the authoring rules in `lessonlint-core`, and prints either
//! a batch failure report or a one-line success summary.
//!
//! ```bash
//! lessonlint
//! lessonlint --catalog "AX Academy/ContentModel/Data/curriculum_v1.json"
//! ```
//!
//! ## Exit codes
//!
//! - `0`: catalog is valid.
//! - `1`: one or more rule violations.
//! - `2`: the catalog could not be loaded.
//!
//! ## Crate Policy
//!
//! - Argument parsing and output live here; rules live in `lessonlint-core`.
//! - stdout carries only the report. Logs and fatal errors go to stderr.

pub mod report;
pub mod validate;

/// Catalog location used when `--catalog` is not given, relative to the
/// working directory.
pub const DEFAULT_CATALOG_PATH: &str = "AX Academy/ContentModel/Data/curriculum_v1.json";

/// Exit code for a catalog that could not be loaded.
pub const EXIT_LOAD_FAILURE: u8 = 2;
