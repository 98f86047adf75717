use log::debug;
use std::sync::Arc;

use super::books_model::{Book, NewBook};
use super::books_traits::{BookRepositoryTrait, BookServiceTrait};
use crate::errors::{Result, StoreError};
use crate::expenses::ExpenseRepositoryTrait;

/// Service for managing ledger books.
pub struct BookService {
    repository: Arc<dyn BookRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BookService {
    /// Creates a new BookService instance.
    pub fn new(
        repository: Arc<dyn BookRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            expense_repository,
        }
    }
}

#[async_trait::async_trait]
impl BookServiceTrait for BookService {
    /// Creates a new book for its owner.
    async fn create_book(&self, new_book: NewBook) -> Result<Book> {
        new_book.validate()?;
        debug!(
            "Creating book '{}' for user {}",
            new_book.name, new_book.owner_id
        );
        self.repository.create(new_book).await
    }

    /// Deletes a book and all expense entries recorded in it.
    ///
    /// Budgets referencing the book are left in place; they aggregate a
    /// zero spend once the book is gone.
    async fn delete_book(&self, user_id: &str, book_id: &str) -> Result<()> {
        let book = self.get_book(user_id, book_id).await?;
        let removed = self.expense_repository.delete_by_book(&book.id).await?;
        debug!("Deleting book {} ({} expense entries)", book.id, removed);
        self.repository.delete(&book.id).await?;
        Ok(())
    }

    /// Retrieves a book, verifying it belongs to the given user.
    ///
    /// A book owned by someone else is reported as not found.
    async fn get_book(&self, user_id: &str, book_id: &str) -> Result<Book> {
        let book = self.repository.get_by_id(book_id).await?;
        if book.owner_id != user_id {
            return Err(StoreError::NotFound(format!("Book {}", book_id)).into());
        }
        Ok(book)
    }

    /// Lists all books owned by the given user.
    async fn list_books(&self, user_id: &str) -> Result<Vec<Book>> {
        self.repository.list_by_user(user_id).await
    }
}
