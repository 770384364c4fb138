//! Shared library for the bookshelf tools.
//!
//! The crate holds the catalog model, the whole-file JSON store, the six
//! command handlers behind the `books` binary, and the schema check behind
//! `validate-books`. Binaries resolve configuration from the environment and
//! pass it down explicitly; nothing in here reads process-wide state except
//! `StoreConfig::from_env` and `logging::init_logging`.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
mod schema_loader;
pub mod store;
pub mod validation;

pub use catalog::{Book, BookId, Catalog, StockChange, UpdateRequest};
pub use commands::{Command, run_command};
pub use config::{DEFAULT_STORE_PATH, STORE_PATH_ENV, StoreConfig};
pub use error::CatalogError;
pub use store::CatalogStore;
pub use validation::{
    CatalogSchema, DEFAULT_CATALOG_FILE, DEFAULT_SCHEMA_FILE, ValidationOutcome,
    validate_catalog_file,
};
