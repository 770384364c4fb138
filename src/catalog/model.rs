//! Serializable book record and the change set applied by `update`.
//!
//! Field order in `Book` is the order written to disk. Records read from an
//! older file may lack `genres` or `in_stock`; serde fills the defaults so
//! every in-memory book carries all six fields. Keys the CLI does not know
//! about are kept in `extra` and written back untouched.

use crate::catalog::identity::BookId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_in_stock() -> bool {
    true
}

impl Book {
    /// New record with no genres, in stock.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            genres: Vec::new(),
            in_stock: default_in_stock(),
            extra: Map::new(),
        }
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

/// Requested stock status on update.
///
/// Kept separate from `bool` so "flag not given" never reads as "out of
/// stock".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StockChange {
    #[default]
    Unchanged,
    InStock,
    OutOfStock,
}

impl StockChange {
    /// Map the mutually exclusive `--in-stock` / `--out-of-stock` pair.
    pub fn from_flags(in_stock: bool, out_of_stock: bool) -> Self {
        match (in_stock, out_of_stock) {
            (true, _) => StockChange::InStock,
            (false, true) => StockChange::OutOfStock,
            (false, false) => StockChange::Unchanged,
        }
    }

    pub fn value(self) -> Option<bool> {
        match self {
            StockChange::Unchanged => None,
            StockChange::InStock => Some(true),
            StockChange::OutOfStock => Some(false),
        }
    }
}

/// Fields supplied to `update`; `None` leaves the stored value alone.
///
/// `genres: Some(vec![])` clears the list, which is different from omitting
/// the flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
    pub genres: Option<Vec<String>>,
    pub in_stock: StockChange,
}

impl UpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.genres.is_none()
            && self.in_stock == StockChange::Unchanged
    }

    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(genres) = &self.genres {
            book.genres = genres.clone();
        }
        if let Some(in_stock) = self.in_stock.value() {
            book.in_stock = in_stock;
        }
    }
}
