//! Cashbooks Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Cashbooks.
//! It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate (or any other store).

pub mod books;
pub mod budgets;
pub mod constants;
pub mod deposits;
pub mod errors;
pub mod expenses;
pub mod loans;
pub mod overview;

// Re-export the overview read model, the crate's main entry point
pub use overview::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
