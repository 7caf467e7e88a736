//! HTTP request handlers.

pub mod authors;
pub mod books;
pub mod health;

pub use authors::author_books_handler;
pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    update_page_count_handler,
};
pub use health::health_handler;
