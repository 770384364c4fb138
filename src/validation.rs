//! Schema check for the catalog document.
//!
//! Used by the `validate-books` binary. Only the first violation is reported;
//! a failing document is an outcome, not an error, so callers decide how to
//! surface it.

use crate::schema_loader::{load_json_schema, read_json_document};
use anyhow::Result;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CATALOG_FILE: &str = "books.json";
pub const DEFAULT_SCHEMA_FILE: &str = "books.schema.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// Message of the first violation found.
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The single line printed by `validate-books`.
    pub fn summary(&self, catalog_name: &str, schema_name: &str) -> String {
        match self {
            ValidationOutcome::Valid => {
                format!("✅ {catalog_name} is valid according to {schema_name}")
            }
            ValidationOutcome::Invalid(message) => format!("❌ Validation error: {message}"),
        }
    }
}

/// Compiled schema for catalog documents.
pub struct CatalogSchema {
    path: PathBuf,
    compiled: JSONSchema,
    raw: Value,
}

impl CatalogSchema {
    pub fn load(path: &Path) -> Result<Self> {
        let loaded = load_json_schema(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            compiled: loaded.compiled,
            raw: loaded.raw,
        })
    }

    pub fn document(&self) -> &Value {
        &self.raw
    }

    pub fn check(&self, instance: &Value) -> ValidationOutcome {
        match self.compiled.validate(instance) {
            Ok(()) => ValidationOutcome::Valid,
            Err(mut errors) => {
                let message = errors
                    .next()
                    .map(|err| err.to_string())
                    .unwrap_or_else(|| "unknown validation failure".to_string());
                debug!(schema = %self.path.display(), violation = %message, "catalog failed validation");
                ValidationOutcome::Invalid(message)
            }
        }
    }
}

/// Load both documents and validate the catalog against the schema.
pub fn validate_catalog_file(catalog_path: &Path, schema_path: &Path) -> Result<ValidationOutcome> {
    let instance = read_json_document(catalog_path)?;
    let schema = CatalogSchema::load(schema_path)?;
    Ok(schema.check(&instance))
}
