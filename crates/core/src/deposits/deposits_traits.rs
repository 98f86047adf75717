//! Fixed deposit repository and service traits.

use async_trait::async_trait;

use super::deposits_model::{FixedDeposit, NewFixedDeposit};
use crate::errors::Result;

/// Trait defining the contract for FixedDeposit repository operations.
#[async_trait]
pub trait DepositRepositoryTrait: Send + Sync {
    /// Creates a new deposit, assigning an id when the input carries none.
    async fn create(&self, new_deposit: NewFixedDeposit) -> Result<FixedDeposit>;

    /// Deletes a deposit by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, deposit_id: &str) -> Result<usize>;

    /// Retrieves a deposit by its ID.
    async fn get_by_id(&self, deposit_id: &str) -> Result<FixedDeposit>;

    /// Lists all deposits owned by the given user.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FixedDeposit>>;
}

/// Trait defining the contract for FixedDeposit service operations.
#[async_trait]
pub trait DepositServiceTrait: Send + Sync {
    /// Creates a new deposit with business validation.
    async fn create_deposit(&self, new_deposit: NewFixedDeposit) -> Result<FixedDeposit>;

    /// Deletes a deposit the given user owns.
    async fn delete_deposit(&self, user_id: &str, deposit_id: &str) -> Result<()>;

    /// Lists all deposits owned by the given user.
    async fn list_deposits(&self, user_id: &str) -> Result<Vec<FixedDeposit>>;
}
