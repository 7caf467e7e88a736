//! DTOs for book endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::Book;

/// Request to add a book to the catalog.
///
/// Accepted as a JSON body or as `application/x-www-form-urlencoded`
/// fields; the page count travels as `count` in both encodings.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,

    #[validate(length(min = 3, message = "author must be at least 3 characters"))]
    pub author: String,

    /// Number of pages, submitted as `count`.
    #[serde(rename = "count")]
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub page_count: i64,
}

impl From<CreateBookRequest> for Book {
    fn from(request: CreateBookRequest) -> Self {
        Book::new(request.name, request.author, request.page_count)
    }
}

/// Request to change a book's page count.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePageCountRequest {
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: i64,
}
