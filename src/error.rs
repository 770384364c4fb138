//! Typed failures surfaced by catalog operations.
//!
//! Library entry points return `anyhow::Result`; these values ride inside the
//! `anyhow::Error` so callers (and tests) can `downcast_ref::<CatalogError>()`
//! when they need to tell a missing id from an I/O problem.

use crate::catalog::BookId;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CatalogError {
    /// The store file exists but does not parse as JSON.
    MalformedStore {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The store parses as JSON but is not an array of book records.
    InvalidRecords {
        path: PathBuf,
        source: serde_json::Error,
    },
    NotFound(BookId),
    DuplicateId(BookId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MalformedStore { path, .. } => {
                write!(f, "{} is not valid JSON", path.display())
            }
            CatalogError::InvalidRecords { path, .. } => {
                write!(f, "{} is not an array of book records", path.display())
            }
            CatalogError::NotFound(id) => write!(f, "Book with id {id} not found"),
            CatalogError::DuplicateId(id) => write!(f, "A book with id {id} already exists"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::MalformedStore { source, .. }
            | CatalogError::InvalidRecords { source, .. } => Some(source),
            _ => None,
        }
    }
}
