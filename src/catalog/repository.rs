//! In-memory catalog: the ordered list every command mutates.
//!
//! Lookups are a linear scan and the first matching id wins. Id uniqueness is
//! enforced when books are added; nothing else reorders or deduplicates.

use crate::catalog::identity::BookId;
use crate::catalog::model::{Book, UpdateRequest};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered collection of books, serialized as a bare JSON array.
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.position(id).is_some()
    }

    /// Index of the first book carrying `id`.
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    pub fn get(&self, id: BookId) -> Result<&Book, CatalogError> {
        self.position(id)
            .map(|idx| &self.books[idx])
            .ok_or(CatalogError::NotFound(id))
    }

    /// Append a book, rejecting an id that is already present.
    pub fn add(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.contains(book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }
        self.books.push(book);
        Ok(())
    }

    pub fn update(&mut self, id: BookId, request: &UpdateRequest) -> Result<&Book, CatalogError> {
        let idx = self.position(id).ok_or(CatalogError::NotFound(id))?;
        request.apply(&mut self.books[idx]);
        Ok(&self.books[idx])
    }

    pub fn remove(&mut self, id: BookId) -> Result<Book, CatalogError> {
        let idx = self.position(id).ok_or(CatalogError::NotFound(id))?;
        Ok(self.books.remove(idx))
    }
}
