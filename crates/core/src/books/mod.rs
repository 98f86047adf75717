//! Books module - domain models, services, and traits.

mod books_model;
mod books_service;
mod books_traits;

// Re-export the public interface
pub use books_model::{Book, NewBook};
pub use books_service::BookService;
pub use books_traits::{BookRepositoryTrait, BookServiceTrait};
