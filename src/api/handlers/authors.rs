//! Handler for the author/books join endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::Book;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every book attributed to the named author.
///
/// # Endpoint
///
/// `GET /authors/{full_name}/books`
///
/// The name must match an author document's `full_name` exactly
/// (case-sensitive); the join itself runs server-side as an aggregation
/// pipeline.
///
/// # Errors
///
/// Returns 404 Not Found when no author document matches the name. An
/// author with no books answers 200 with an empty array.
pub async fn author_books_handler(
    Path(full_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.books.find_author_books(&full_name).await?;

    Ok(Json(books))
}
