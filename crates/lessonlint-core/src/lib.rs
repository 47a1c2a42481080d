//! # lessonlint-core: Curriculum Catalog Authoring Rules
//!
//! Loads a curriculum catalog and checks every lesson in it against the
//! authoring rules: required objectives, hints and scaffolds, a known variant
//! and difficulty, a complete mastery rule, per-item hints and scaffolds, and
//! full variant coverage for each (grade, strand) pair.
//!
//! ## Outcomes
//!
//! A run has two distinct failure tiers:
//!
//! - [`load_catalog`] returns a [`CatalogError`] when the document is missing,
//!   unreadable, or malformed. Nothing is validated in that case.
//! - [`validate_catalog`] never fails. It returns every rule violation it
//!   finds as [`Violations`], in document order, followed by coverage gaps.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lessonlint-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Validation is deterministic: the same document always yields the same
//!   violations in the same order.

pub mod error;
pub mod load;
pub mod model;
pub mod validate;

pub use error::CatalogError;
pub use load::{load_catalog, parse_catalog};
pub use model::{Catalog, Difficulty, Item, Lesson, MasteryRule, Variant, MISSING};
pub use validate::{validate_catalog, Violations};
