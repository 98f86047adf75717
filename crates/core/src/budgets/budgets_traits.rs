//! Budget repository and service traits.

use async_trait::async_trait;

use super::budgets_model::{Budget, NewBudget};
use crate::errors::Result;

/// Trait defining the contract for Budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Creates a new budget, assigning an id when the input carries none.
    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;

    /// Deletes a budget by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, budget_id: &str) -> Result<usize>;

    /// Retrieves a budget by its ID.
    async fn get_by_id(&self, budget_id: &str) -> Result<Budget>;

    /// Lists all budgets owned by the given user.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Budget>>;
}

/// Trait defining the contract for Budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Creates a new budget after verifying the target book belongs to
    /// its owner.
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    /// Deletes a budget the given user owns.
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;

    /// Lists all budgets owned by the given user.
    async fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
}
