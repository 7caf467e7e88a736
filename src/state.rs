use std::sync::Arc;

use crate::domain::repositories::BookRepository;

/// Shared application state injected into all handlers.
///
/// Holds the repository behind a trait object so handlers never touch the
/// driver directly and tests can substitute a mock. Constructed once at
/// startup; cloning is cheap (one `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }
}
