//! Author entity and the author/books join projection.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Book;

/// An author document from the `authors` collection.
///
/// Exists only as the anchor of the books join; the service defines no CRUD
/// operations for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub full_name: String,
}

/// Read-only projection produced by the author/books aggregation.
///
/// Pairs an author's `full_name` with every [`Book`] whose `author` field
/// textually matches it. Computed on demand by the `$lookup` stage and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorBooks {
    pub full_name: String,
    pub books: Vec<Book>,
}
