//! Book entity stored in the `books` collection.

use serde::{Deserialize, Serialize};

/// A catalog entry for a single book.
///
/// The store-assigned `_id` is deliberately not part of the entity: MongoDB
/// owns identifier assignment. [`crate::domain::repositories::BookRepository::create`]
/// returns the new id as a hex string, and lookups receive it back as a path
/// parameter.
///
/// Serialized field names match the persisted document shape
/// (`name`, `author`, `page_count`), so the same struct is used for BSON
/// round trips and JSON responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub author: String,
    pub page_count: i64,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(name: impl Into<String>, author: impl Into<String>, page_count: i64) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            page_count,
        }
    }
}
