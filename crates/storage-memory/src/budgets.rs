//! In-memory budget repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use cashbooks_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use cashbooks_core::errors::{Result, StoreError};

/// Budget repository backed by a concurrent map keyed by budget id.
#[derive(Default)]
pub struct BudgetRepository {
    budgets: DashMap<String, Budget>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        let budget = Budget {
            id: new_budget.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            owner_id: new_budget.owner_id,
            book_id: new_budget.book_id,
            amount: new_budget.amount,
            created_at: Utc::now().naive_utc(),
        };
        self.budgets.insert(budget.id.clone(), budget.clone());
        Ok(budget)
    }

    async fn delete(&self, budget_id: &str) -> Result<usize> {
        Ok(self.budgets.remove(budget_id).map_or(0, |_| 1))
    }

    async fn get_by_id(&self, budget_id: &str) -> Result<Budget> {
        self.budgets
            .get(budget_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(format!("Budget {}", budget_id)).into())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut budgets: Vec<Budget> = self
            .budgets
            .iter()
            .filter(|entry| entry.value().owner_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        budgets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(budgets)
    }
}
