//! In-memory fixed deposit repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use cashbooks_core::deposits::{DepositRepositoryTrait, FixedDeposit, NewFixedDeposit};
use cashbooks_core::errors::{Result, StoreError};

/// Fixed deposit repository backed by a concurrent map keyed by deposit id.
#[derive(Default)]
pub struct DepositRepository {
    deposits: DashMap<String, FixedDeposit>,
}

impl DepositRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepositRepositoryTrait for DepositRepository {
    async fn create(&self, new_deposit: NewFixedDeposit) -> Result<FixedDeposit> {
        let deposit = FixedDeposit {
            id: new_deposit.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            owner_id: new_deposit.owner_id,
            name: new_deposit.name,
            principal_amount: new_deposit.principal_amount,
            created_at: Utc::now().naive_utc(),
        };
        self.deposits.insert(deposit.id.clone(), deposit.clone());
        Ok(deposit)
    }

    async fn delete(&self, deposit_id: &str) -> Result<usize> {
        Ok(self.deposits.remove(deposit_id).map_or(0, |_| 1))
    }

    async fn get_by_id(&self, deposit_id: &str) -> Result<FixedDeposit> {
        self.deposits
            .get(deposit_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(format!("Deposit {}", deposit_id)).into())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FixedDeposit>> {
        let mut deposits: Vec<FixedDeposit> = self
            .deposits
            .iter()
            .filter(|entry| entry.value().owner_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        deposits.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(deposits)
    }
}
