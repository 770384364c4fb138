//! Checks `books.json` against `books.schema.json` in the working directory.
//!
//! Prints one outcome line to stdout. A schema violation is reported, not
//! treated as a failure; unreadable inputs or an uncompilable schema exit 1.

use anyhow::Result;
use bookshelf::logging::init_logging;
use bookshelf::{DEFAULT_CATALOG_FILE, DEFAULT_SCHEMA_FILE, validate_catalog_file};
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging();
    let outcome = validate_catalog_file(
        Path::new(DEFAULT_CATALOG_FILE),
        Path::new(DEFAULT_SCHEMA_FILE),
    )?;
    println!(
        "{}",
        outcome.summary(DEFAULT_CATALOG_FILE, DEFAULT_SCHEMA_FILE)
    );
    Ok(())
}
