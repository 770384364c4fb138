//! The six catalog commands.
//!
//! Each handler performs one load, mutates the in-memory catalog, and saves
//! only when the mutation succeeded. Success output goes to the supplied
//! writer; failures come back as errors for the binary to report.

use crate::catalog::{Book, BookId, UpdateRequest};
use crate::store::{CatalogStore, render_compact, render_pretty};
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// One parsed invocation of the `books` binary.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Init,
    List { pretty: bool },
    Get { id: BookId },
    Add { book: Book },
    Update { id: BookId, changes: UpdateRequest },
    Delete { id: BookId },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::List { .. } => "list",
            Command::Get { .. } => "get",
            Command::Add { .. } => "add",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
        }
    }
}

pub fn run_command(store: &CatalogStore, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Init => init(store, out),
        Command::List { pretty } => list(store, pretty, out),
        Command::Get { id } => get(store, id, out),
        Command::Add { book } => add(store, book, out),
        Command::Update { id, changes } => update(store, id, &changes, out),
        Command::Delete { id } => delete(store, id, out),
    }
}

/// Create an empty store unless one is already there.
pub fn init(store: &CatalogStore, out: &mut impl Write) -> Result<()> {
    if store.exists() {
        writeln!(out, "{} already exists.", store.path().display())?;
        return Ok(());
    }
    store.save(&Default::default())?;
    info!(path = %store.path().display(), "initialized empty catalog");
    writeln!(out, "Created empty {}", store.path().display())?;
    Ok(())
}

pub fn list(store: &CatalogStore, pretty: bool, out: &mut impl Write) -> Result<()> {
    let catalog = store.load()?;
    let rendered = if pretty {
        render_pretty(&catalog)?
    } else {
        render_compact(&catalog)?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

pub fn get(store: &CatalogStore, id: BookId, out: &mut impl Write) -> Result<()> {
    let catalog = store.load()?;
    let book = catalog.get(id)?;
    writeln!(out, "{}", render_pretty(book)?)?;
    Ok(())
}

pub fn add(store: &CatalogStore, book: Book, out: &mut impl Write) -> Result<()> {
    let mut catalog = store.load()?;
    let id = book.id;
    catalog.add(book)?;
    store.save(&catalog)?;
    info!(%id, books = catalog.len(), "added book");
    writeln!(out, "Added book id {id}")?;
    Ok(())
}

pub fn update(
    store: &CatalogStore,
    id: BookId,
    changes: &UpdateRequest,
    out: &mut impl Write,
) -> Result<()> {
    let mut catalog = store.load()?;
    catalog.update(id, changes)?;
    // An update with no fields still rewrites the file, matching a no-op edit.
    store.save(&catalog)?;
    info!(%id, empty = changes.is_empty(), "updated book");
    writeln!(out, "Updated book id {id}")?;
    Ok(())
}

pub fn delete(store: &CatalogStore, id: BookId, out: &mut impl Write) -> Result<()> {
    let mut catalog = store.load()?;
    let removed = catalog.remove(id)?;
    store.save(&catalog)?;
    info!(id = %removed.id, books = catalog.len(), "deleted book");
    writeln!(out, "Deleted book id {}", removed.id)?;
    Ok(())
}
