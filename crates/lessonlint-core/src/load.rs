//! # Catalog Loader
//!
//! Reads a catalog document from disk and parses it into a [`Catalog`].
//! Loading either fully succeeds or returns a [`CatalogError`]; there is no
//! partially loaded catalog.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::error::Category;

use crate::error::CatalogError;
use crate::model::Catalog;

/// Read and parse the catalog at `path`.
///
/// The file is read in a single call and closed before parsing begins.
///
/// # Errors
///
/// - [`CatalogError::NotFound`] if nothing exists at `path`.
/// - [`CatalogError::Unreadable`] for any other I/O failure.
/// - [`CatalogError::InvalidJson`] / [`CatalogError::InvalidLayout`] as
///   described on [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let catalog = parse_catalog(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        lessons = catalog.lesson_count(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse catalog text that was read from `path`.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidJson`] when `content` is not well-formed
/// JSON, and [`CatalogError::InvalidLayout`] when it is well-formed but does
/// not have the catalog's shape (for example, `lessons` is not a list).
pub fn parse_catalog(content: &str, path: &Path) -> Result<Catalog, CatalogError> {
    serde_json::from_str(content).map_err(|e| match e.classify() {
        Category::Data => CatalogError::InvalidLayout {
            path: path.to_path_buf(),
            source: e,
        },
        Category::Syntax | Category::Eof | Category::Io => CatalogError::InvalidJson {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
