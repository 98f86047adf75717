//! In-memory expense repository.
//!
//! Expenses are stored per book, in insertion order, mirroring the
//! subcollection layout of the hosted store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use cashbooks_core::errors::Result;
use cashbooks_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};

/// Expense repository backed by a concurrent map keyed by book id.
#[derive(Default)]
pub struct ExpenseRepository {
    by_book: DashMap<String, Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn create(&self, new_expense: NewExpense) -> Result<Expense> {
        let expense = Expense {
            id: new_expense.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            book_id: new_expense.book_id.clone(),
            amount: new_expense.amount,
            entry_type: new_expense.entry_type,
            note: new_expense.note,
            created_at: Utc::now().naive_utc(),
        };
        self.by_book
            .entry(new_expense.book_id)
            .or_default()
            .push(expense.clone());
        Ok(expense)
    }

    async fn delete(&self, expense_id: &str) -> Result<usize> {
        let mut removed = 0;
        for mut entry in self.by_book.iter_mut() {
            let before = entry.value().len();
            entry.value_mut().retain(|e| e.id != expense_id);
            removed += before - entry.value().len();
        }
        Ok(removed)
    }

    async fn delete_by_book(&self, book_id: &str) -> Result<usize> {
        Ok(self
            .by_book
            .remove(book_id)
            .map_or(0, |(_, expenses)| expenses.len()))
    }

    async fn list_by_book(&self, book_id: &str) -> Result<Vec<Expense>> {
        Ok(self
            .by_book
            .get(book_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
