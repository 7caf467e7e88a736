//! Repository trait for book data access.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the books collection.
///
/// Every operation is a single round trip to the document store; the trait
/// carries no business logic of its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoBookRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts one book and returns the store-assigned identifier as a hex
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, book: Book) -> Result<String, AppError>;

    /// Fetches the book whose identifier matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not a well-formed
    /// identifier, [`AppError::NotFound`] if no document matches, and
    /// [`AppError::Internal`] on store errors.
    async fn get_by_id(&self, id: &str) -> Result<Book, AppError>;

    /// Fetches every book in cursor order.
    ///
    /// A mid-iteration decode failure aborts the scan; the returned vector
    /// then holds whatever documents decoded before the failure, and the
    /// error rides alongside. Callers decide whether the partial result is
    /// still useful.
    async fn list_all(&self) -> (Vec<Book>, Option<AppError>);

    /// Deletes the book whose identifier matches `id`.
    ///
    /// Matching zero documents is not an error; the delete is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not a well-formed
    /// identifier and [`AppError::Internal`] on store errors.
    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;

    /// Sets only the `page_count` field on the matching book, leaving the
    /// other fields untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not a well-formed
    /// identifier and [`AppError::Internal`] on store errors.
    async fn update_page_count(&self, id: &str, page_count: i64) -> Result<(), AppError>;

    /// Returns every book whose `author` field exactly matches an author
    /// document's `full_name`, via a server-side join on the authors
    /// collection.
    ///
    /// The match is case-sensitive and whole-string; no partial or fuzzy
    /// matching.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no author document matches
    /// `full_name` and [`AppError::Internal`] on store errors.
    async fn find_author_books(&self, full_name: &str) -> Result<Vec<Book>, AppError>;

    /// Liveness check against the store, used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
