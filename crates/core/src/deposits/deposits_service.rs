use log::debug;
use std::sync::Arc;

use super::deposits_model::{FixedDeposit, NewFixedDeposit};
use super::deposits_traits::{DepositRepositoryTrait, DepositServiceTrait};
use crate::errors::{Result, StoreError};

/// Service for managing fixed deposits.
pub struct DepositService {
    repository: Arc<dyn DepositRepositoryTrait>,
}

impl DepositService {
    /// Creates a new DepositService instance.
    pub fn new(repository: Arc<dyn DepositRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl DepositServiceTrait for DepositService {
    async fn create_deposit(&self, new_deposit: NewFixedDeposit) -> Result<FixedDeposit> {
        new_deposit.validate()?;
        debug!(
            "Creating fixed deposit '{}' of {} for user {}",
            new_deposit.name, new_deposit.principal_amount, new_deposit.owner_id
        );
        self.repository.create(new_deposit).await
    }

    async fn delete_deposit(&self, user_id: &str, deposit_id: &str) -> Result<()> {
        let deposit = self.repository.get_by_id(deposit_id).await?;
        if deposit.owner_id != user_id {
            return Err(StoreError::NotFound(format!("Deposit {}", deposit_id)).into());
        }
        self.repository.delete(&deposit.id).await?;
        Ok(())
    }

    async fn list_deposits(&self, user_id: &str) -> Result<Vec<FixedDeposit>> {
        self.repository.list_by_user(user_id).await
    }
}
