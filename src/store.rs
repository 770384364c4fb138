//! Whole-file persistence for the catalog document.
//!
//! A load reads the entire file and a save rewrites it. Saves go through a
//! temporary file in the target directory that is renamed over the store, so
//! a concurrent reader sees either the previous document or the new one.
//! There is no locking; the last writer wins.

use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::CatalogError;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

pub struct CatalogStore {
    config: StoreConfig,
}

impl CatalogStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Read the catalog; a missing file is an empty catalog.
    ///
    /// Unparseable text fails with `CatalogError::MalformedStore`; valid JSON
    /// that is not an array of book records fails with
    /// `CatalogError::InvalidRecords`. The file is left alone either way.
    pub fn load(&self) -> Result<Catalog> {
        let path = self.path();
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "store absent, starting empty");
                return Ok(Catalog::new());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };

        let document: Value =
            serde_json::from_str(&data).map_err(|source| CatalogError::MalformedStore {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog: Catalog =
            serde_json::from_value(document).map_err(|source| CatalogError::InvalidRecords {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), books = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Write the full catalog as 2-space indented JSON plus a trailing newline.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let path = self.path();
        let mut document = render_pretty(catalog)?;
        document.push('\n');

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("staging write next to {}", path.display()))?;
        staged
            .write_all(document.as_bytes())
            .with_context(|| format!("writing {}", staged.path().display()))?;
        staged
            .as_file()
            .sync_all()
            .with_context(|| format!("flushing {}", staged.path().display()))?;
        match_permissions(path, staged.path())?;
        staged
            .persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("replacing {}", path.display()))?;

        debug!(path = %path.display(), books = catalog.len(), "saved catalog");
        Ok(())
    }
}

/// Serialize with 2-space indentation; non-ASCII text is written as-is.
pub fn render_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing catalog")
}

/// Single-line rendering used by `list` without `--pretty`.
///
/// Separators are `", "` and `": "`, so one-line listings read the same as
/// the usual `[{"id": 1, "title": ...}]` shape.
pub fn render_compact<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value
        .serialize(&mut serializer)
        .context("serializing catalog")?;
    String::from_utf8(buf).context("serialized catalog is not UTF-8")
}

/// Compact formatter with a space after each separator.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Temp files are created owner-only; keep the existing store's mode, or use
/// the usual 0644 for a fresh one.
fn match_permissions(target: &Path, staged: &Path) -> Result<()> {
    if let Ok(meta) = fs::metadata(target) {
        fs::set_permissions(staged, meta.permissions())?;
        return Ok(());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged, fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}
