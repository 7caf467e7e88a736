//! MongoDB repository implementations.
//!
//! Concrete implementations of domain repository traits over the official
//! MongoDB driver.

pub mod mongo_book_repository;

pub use mongo_book_repository::MongoBookRepository;
