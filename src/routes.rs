//! Application router configuration.
//!
//! # Route Structure
//!
//! - `GET    /albums`                      - List all books
//! - `POST   /albums`                      - Add a book (JSON or form body)
//! - `GET    /albums/{id}`                 - Fetch one book
//! - `DELETE /albums/{id}`                 - Delete a book (idempotent)
//! - `PATCH  /albums/{id}`                 - Change a book's page count
//! - `GET    /authors/{full_name}/books`   - Books by author (server-side join)
//! - `GET    /health`                      - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging with latency
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    author_books_handler, create_book_handler, delete_book_handler, get_book_handler,
    health_handler, list_books_handler, update_page_count_handler,
};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// `state` is the shared application state injected into all handlers.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let router = Router::new()
        .route(
            "/albums",
            get(list_books_handler).post(create_book_handler),
        )
        .route(
            "/albums/{id}",
            get(get_book_handler)
                .delete(delete_book_handler)
                .patch(update_page_count_handler),
        )
        .route("/authors/{full_name}/books", get(author_books_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(trace);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
