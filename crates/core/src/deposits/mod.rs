//! Fixed deposits module - domain models, services, and traits.

mod deposits_model;
mod deposits_service;
mod deposits_traits;

// Re-export the public interface
pub use deposits_model::{FixedDeposit, NewFixedDeposit};
pub use deposits_service::DepositService;
pub use deposits_traits::{DepositRepositoryTrait, DepositServiceTrait};
