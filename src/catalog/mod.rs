//! Book catalog wiring.
//!
//! `model` holds the record types as they appear in the JSON document,
//! `repository` the in-memory list with id lookup, and `identity` the id
//! newtype shared by both and by the CLI parser.

pub mod identity;
pub mod model;
pub mod repository;

pub use identity::BookId;
pub use model::{Book, StockChange, UpdateRequest};
pub use repository::Catalog;
