//! In-memory storage implementation for Cashbooks.
//!
//! This crate implements the repository traits defined in `cashbooks-core`
//! over thread-safe in-memory collections. It stands in for the hosted
//! document database the application runs against in production, and backs
//! the integration tests.
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!             │
//!             ▼
//!   storage-memory (this crate)
//!             │
//!             ▼
//!     DashMap collections
//! ```

pub mod books;
pub mod budgets;
pub mod deposits;
pub mod expenses;
pub mod loans;
pub mod store;

pub use books::BookRepository;
pub use budgets::BudgetRepository;
pub use deposits::DepositRepository;
pub use expenses::ExpenseRepository;
pub use loans::LoanRepository;
pub use store::MemoryStore;

// Re-export from cashbooks-core for convenience
pub use cashbooks_core::errors::{Error, Result, StoreError};
