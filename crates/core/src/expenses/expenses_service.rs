use log::debug;
use std::sync::Arc;

use super::expenses_model::{Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::books::BookRepositoryTrait;
use crate::errors::{Result, StoreError};

/// Service for recording and reading expense entries.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    book_repository: Arc<dyn BookRepositoryTrait>,
}

impl ExpenseService {
    /// Creates a new ExpenseService instance.
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        book_repository: Arc<dyn BookRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            book_repository,
        }
    }

    /// Ensures the book exists and belongs to the given user.
    async fn check_book_owner(&self, user_id: &str, book_id: &str) -> Result<()> {
        let book = self.book_repository.get_by_id(book_id).await?;
        if book.owner_id != user_id {
            return Err(StoreError::NotFound(format!("Book {}", book_id)).into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        self.check_book_owner(user_id, &new_expense.book_id).await?;
        debug!(
            "Recording {:?} entry of {} in book {}",
            new_expense.entry_type, new_expense.amount, new_expense.book_id
        );
        self.repository.create(new_expense).await
    }

    async fn delete_expense(&self, user_id: &str, book_id: &str, expense_id: &str) -> Result<()> {
        self.check_book_owner(user_id, book_id).await?;
        self.repository.delete(expense_id).await?;
        Ok(())
    }

    async fn list_expenses(&self, user_id: &str, book_id: &str) -> Result<Vec<Expense>> {
        self.check_book_owner(user_id, book_id).await?;
        self.repository.list_by_book(book_id).await
    }
}
