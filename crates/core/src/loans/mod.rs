//! Loans module - domain models, services, and traits.

mod loans_model;
mod loans_service;
mod loans_traits;

// Re-export the public interface
pub use loans_model::{Loan, NewLoan};
pub use loans_service::LoanService;
pub use loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
