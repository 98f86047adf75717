//! Expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

// Re-export the public interface
pub use expenses_model::{EntryType, Expense, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

#[cfg(test)]
mod expenses_model_tests;
