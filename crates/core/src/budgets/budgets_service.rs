use log::debug;
use std::sync::Arc;

use super::budgets_model::{Budget, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::books::BookRepositoryTrait;
use crate::errors::{Result, StoreError};

/// Service for managing budgets.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    book_repository: Arc<dyn BookRepositoryTrait>,
}

impl BudgetService {
    /// Creates a new BudgetService instance.
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        book_repository: Arc<dyn BookRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            book_repository,
        }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        let book = self.book_repository.get_by_id(&new_budget.book_id).await?;
        if book.owner_id != new_budget.owner_id {
            return Err(StoreError::NotFound(format!("Book {}", new_budget.book_id)).into());
        }
        debug!(
            "Creating budget of {} against book {} for user {}",
            new_budget.amount, new_budget.book_id, new_budget.owner_id
        );
        self.repository.create(new_budget).await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        let budget = self.repository.get_by_id(budget_id).await?;
        if budget.owner_id != user_id {
            return Err(StoreError::NotFound(format!("Budget {}", budget_id)).into());
        }
        self.repository.delete(&budget.id).await?;
        Ok(())
    }

    async fn list_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_by_user(user_id).await
    }
}
