//! JSON document and JSON Schema loading.
//!
//! Both the catalog instance and its schema are read the same way; the schema
//! is then compiled once so callers can validate any number of instances.

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub compiled: JSONSchema,
    pub raw: Value,
}

/// Read and parse any JSON document from disk.
pub(crate) fn read_json_document(path: &Path) -> Result<Value> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

pub(crate) fn load_json_schema(path: &Path) -> Result<SchemaLoadResult> {
    let raw = read_json_document(path)
        .with_context(|| format!("loading schema {}", path.display()))?;
    if !raw.is_object() && !raw.is_boolean() {
        return Err(anyhow!(
            "schema {} must be a JSON object or boolean",
            path.display()
        ));
    }
    // Compile errors borrow the schema value; flatten them to text here.
    let compiled = JSONSchema::compile(&raw)
        .map_err(|err| anyhow!("compiling schema {}: {err}", path.display()))?;
    Ok(SchemaLoadResult { compiled, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    #[test]
    fn rejects_non_object_schema() -> Result<()> {
        let file = NamedTempFile::new()?;
        serde_json::to_writer(file.as_file(), &json!([1, 2, 3]))?;
        let err = load_json_schema(file.path())
            .err()
            .expect("array is not a schema");
        assert!(err.to_string().contains("must be a JSON object"));
        Ok(())
    }

    #[test]
    fn reports_unparseable_schema_with_path() -> Result<()> {
        let file = NamedTempFile::new()?;
        std::fs::write(file.path(), "{ nope")?;
        let err = load_json_schema(file.path())
            .err()
            .expect("broken JSON");
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));
        Ok(())
    }

    #[test]
    fn compiles_valid_schema() -> Result<()> {
        let file = NamedTempFile::new()?;
        serde_json::to_writer(file.as_file(), &json!({"type": "array"}))?;
        let loaded = load_json_schema(file.path())?;
        assert!(loaded.compiled.is_valid(&json!([])));
        assert!(!loaded.compiled.is_valid(&json!({})));
        assert_eq!(loaded.raw["type"], "array");
        Ok(())
    }
}
