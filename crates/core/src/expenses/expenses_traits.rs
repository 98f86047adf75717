//! Expense repository and service traits.

use async_trait::async_trait;

use super::expenses_model::{Expense, NewExpense};
use crate::errors::Result;

/// Trait defining the contract for Expense repository operations.
///
/// Expenses live under their book; ownership is derived through the book,
/// so reads are scoped by book id.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Records a new expense entry, assigning an id when the input
    /// carries none.
    async fn create(&self, new_expense: NewExpense) -> Result<Expense>;

    /// Deletes an expense entry by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, expense_id: &str) -> Result<usize>;

    /// Deletes every expense entry recorded in the given book.
    ///
    /// Returns the number of deleted records.
    async fn delete_by_book(&self, book_id: &str) -> Result<usize>;

    /// Lists all expense entries recorded in the given book.
    async fn list_by_book(&self, book_id: &str) -> Result<Vec<Expense>>;
}

/// Trait defining the contract for Expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    /// Records a new expense entry after verifying the target book
    /// belongs to the given user.
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    /// Deletes an expense entry from a book the given user owns.
    async fn delete_expense(&self, user_id: &str, book_id: &str, expense_id: &str) -> Result<()>;

    /// Lists a book's expense entries, verifying ownership first.
    async fn list_expenses(&self, user_id: &str, book_id: &str) -> Result<Vec<Expense>>;
}
