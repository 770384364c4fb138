//! Store location configuration.
//!
//! The binaries resolve the catalog path once from the environment and hand
//! the resulting `StoreConfig` to `CatalogStore::new`; nothing below the
//! binary layer reads the environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternate catalog file.
pub const STORE_PATH_ENV: &str = "BOOKS_FILE";
/// Catalog file used when `BOOKS_FILE` is unset.
pub const DEFAULT_STORE_PATH: &str = "books.json";

/// Where the catalog document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Honor `BOOKS_FILE` when it is set to something non-empty.
    pub fn from_env() -> Self {
        Self::from_override(env::var_os(STORE_PATH_ENV))
    }

    fn from_override(value: Option<OsString>) -> Self {
        match value {
            Some(raw) if !raw.is_empty() => Self::new(raw),
            _ => Self::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}
