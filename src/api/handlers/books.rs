//! Handlers for the books endpoints (list, get, create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use validator::Validate;

use crate::api::dto::book::{CreateBookRequest, UpdatePageCountRequest};
use crate::domain::entities::Book;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::json_or_form::JsonOrForm;

/// JSON representation of a freshly created book.
///
/// Echoes the submitted fields and adds the store-assigned id so the client
/// can address the book in follow-up requests.
#[derive(Debug, Serialize)]
pub struct BookCreatedResponse {
    pub id: String,
    pub name: String,
    pub author: String,
    pub page_count: i64,
}

/// Lists every book in the catalog.
///
/// # Endpoint
///
/// `GET /albums`
///
/// # Errors
///
/// Never fails from the client's point of view: a repository error is
/// logged and the response is still 200 with whatever partial (possibly
/// empty) sequence was obtained before the failure.
pub async fn list_books_handler(State(state): State<AppState>) -> Json<Vec<Book>> {
    let (books, error) = state.books.list_all().await;

    if let Some(e) = error {
        tracing::error!(error = %e, returned = books.len(), "failed to list books; answering with partial result");
    }

    Json(books)
}

/// Fetches a single book by its identifier.
///
/// # Endpoint
///
/// `GET /albums/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the identifier is malformed, no document
/// matches, or the stored document has an empty `author` field.
pub async fn get_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Book>, AppError> {
    let book = state.books.get_by_id(&id).await.map_err(|e| {
        tracing::debug!(error = %e, id, "book lookup failed");
        AppError::not_found("book not found")
    })?;

    // A decoded document with no author is treated as absent.
    if book.author.is_empty() {
        return Err(AppError::not_found("book not found"));
    }

    Ok(Json(book))
}

/// Adds a book to the catalog.
///
/// # Endpoint
///
/// `POST /albums`
///
/// # Request Body
///
/// Form fields `name`, `author`, `count`, or the JSON equivalent:
///
/// ```json
/// { "name": "Dune", "author": "Frank Herbert", "count": 412 }
/// ```
///
/// The body is decoded exactly once; a bind or validation failure is
/// terminal for the request.
///
/// # Errors
///
/// Returns 404 with a bind-error body when decoding or validation fails
/// (`name` and `author` at least 3 characters, `count` at least 1).
pub async fn create_book_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookCreatedResponse>), AppError> {
    if let Err(e) = payload.validate() {
        tracing::warn!(
            name = %payload.name,
            author = %payload.author,
            page_count = payload.page_count,
            error = %e,
            "rejected book payload"
        );
        return Err(AppError::not_found(format!("invalid book payload: {e}")));
    }

    let book = Book::from(payload);
    let id = state.books.create(book.clone()).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            id,
            name: book.name,
            author: book.author,
            page_count: book.page_count,
        }),
    ))
}

/// Deletes a book by its identifier.
///
/// # Endpoint
///
/// `DELETE /albums/{id}`
///
/// # Behavior
///
/// Deleting an identifier that matches nothing still answers 204; the
/// operation is idempotent.
///
/// # Errors
///
/// Returns 404 when the identifier is malformed.
pub async fn delete_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .books
        .delete_by_id(&id)
        .await
        .map_err(not_found_on_bad_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Changes a book's page count, leaving its other fields untouched.
///
/// # Endpoint
///
/// `PATCH /albums/{id}`
///
/// # Request Body
///
/// ```json
/// { "count": 500 }
/// ```
///
/// # Errors
///
/// Returns 400 when `count` is below 1 and 404 when the identifier is
/// malformed or the book cannot be read back after the update.
pub async fn update_page_count_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<UpdatePageCountRequest>,
) -> Result<Json<Book>, AppError> {
    payload.validate()?;

    state
        .books
        .update_page_count(&id, payload.count)
        .await
        .map_err(not_found_on_bad_id)?;

    let book = state
        .books
        .get_by_id(&id)
        .await
        .map_err(|_| AppError::not_found("book not found"))?;

    Ok(Json(book))
}

/// Collapses malformed-identifier errors into the read path's 404 contract.
fn not_found_on_bad_id(e: AppError) -> AppError {
    match e {
        AppError::Validation { .. } => AppError::not_found("book not found"),
        other => other,
    }
}
