//! Book repository and service traits.
//!
//! These traits define the contract for book operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::books_model::{Book, NewBook};
use crate::errors::Result;

/// Trait defining the contract for Book repository operations.
///
/// All reads are scoped to an owner: a repository must never return
/// another user's books.
#[async_trait]
pub trait BookRepositoryTrait: Send + Sync {
    /// Creates a new book, assigning an id when the input carries none.
    async fn create(&self, new_book: NewBook) -> Result<Book>;

    /// Deletes a book by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, book_id: &str) -> Result<usize>;

    /// Retrieves a book by its ID.
    async fn get_by_id(&self, book_id: &str) -> Result<Book>;

    /// Lists all books owned by the given user.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Book>>;
}

/// Trait defining the contract for Book service operations.
#[async_trait]
pub trait BookServiceTrait: Send + Sync {
    /// Creates a new book with business validation.
    async fn create_book(&self, new_book: NewBook) -> Result<Book>;

    /// Deletes a book and its expense entries.
    async fn delete_book(&self, user_id: &str, book_id: &str) -> Result<()>;

    /// Retrieves a book owned by the given user.
    async fn get_book(&self, user_id: &str, book_id: &str) -> Result<Book>;

    /// Lists all books owned by the given user.
    async fn list_books(&self, user_id: &str) -> Result<Vec<Book>>;
}
