//! # Error Types
//!
//! Load-time failures. These are fatal for a run: a catalog that cannot be
//! read or parsed is never validated. Rule violations found in a parsed
//! catalog are not errors and are reported through
//! [`Violations`](crate::validate::Violations) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a [`Catalog`](crate::model::Catalog) from disk.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Nothing exists at the catalog path.
    #[error("catalog not found at {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The path exists but could not be read as UTF-8 text.
    #[error("cannot read catalog at {}: {source}", path.display())]
    Unreadable {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not syntactically valid JSON.
    #[error("catalog at {} is not valid JSON: {source}", path.display())]
    InvalidJson {
        /// Path of the malformed document.
        path: PathBuf,
        /// Parser diagnostic, including line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The content is valid JSON but its shape is not a catalog.
    #[error("catalog at {} does not match the catalog layout: {source}", path.display())]
    InvalidLayout {
        /// Path of the mis-shaped document.
        path: PathBuf,
        /// Parser diagnostic naming the offending field.
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The catalog path this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Unreadable { path, .. }
            | Self::InvalidJson { path, .. }
            | Self::InvalidLayout { path, .. } => path,
        }
    }
}
