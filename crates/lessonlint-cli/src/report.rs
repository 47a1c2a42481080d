//! # Report Emitter
//!
//! Turns a validation outcome into the text printed on stdout and the
//! process exit code.

use std::borrow::Cow;
use std::fmt;

use lessonlint_core::{Catalog, Violations};

/// Outcome of validating one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// At least one rule was violated.
    Failed(Violations),
    /// Every lesson passed.
    Passed {
        lesson_count: usize,
        /// Distinct grades, sorted.
        grades: Vec<String>,
    },
}

impl Report {
    /// Build the report for `catalog` given its validation result.
    pub fn new(catalog: &Catalog, violations: Violations) -> Self {
        if violations.is_empty() {
            Self::Passed {
                lesson_count: catalog.lesson_count(),
                grades: catalog.grades().into_iter().map(Cow::into_owned).collect(),
            }
        } else {
            Self::Failed(violations)
        }
    }

    fn is_success(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// `0` when the catalog passed, `1` when it has violations.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(violations) => {
                write!(f, "Lesson validation failed:")?;
                for message in violations.iter() {
                    write!(f, "\n  - {message}")?;
                }
                Ok(())
            }
            Self::Passed {
                lesson_count,
                grades,
            } => write!(
                f,
                "Validated {lesson_count} lessons across grades: {}",
                grades.join(", ")
            ),
        }
    }
}
