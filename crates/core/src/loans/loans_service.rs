use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::loans_model::{Loan, NewLoan};
use super::loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
use crate::errors::{Result, StoreError, ValidationError};
use crate::Error;

/// Service for managing loans.
pub struct LoanService {
    repository: Arc<dyn LoanRepositoryTrait>,
}

impl LoanService {
    /// Creates a new LoanService instance.
    pub fn new(repository: Arc<dyn LoanRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Retrieves a loan, verifying it belongs to the given user.
    async fn get_owned(&self, user_id: &str, loan_id: &str) -> Result<Loan> {
        let loan = self.repository.get_by_id(loan_id).await?;
        if loan.owner_id != user_id {
            return Err(StoreError::NotFound(format!("Loan {}", loan_id)).into());
        }
        Ok(loan)
    }
}

#[async_trait::async_trait]
impl LoanServiceTrait for LoanService {
    async fn create_loan(&self, new_loan: NewLoan) -> Result<Loan> {
        new_loan.validate()?;
        debug!(
            "Creating loan '{}' of {} for user {}",
            new_loan.name, new_loan.amount, new_loan.owner_id
        );
        self.repository.create(new_loan).await
    }

    async fn record_payment(&self, user_id: &str, loan_id: &str, payment: Decimal) -> Result<Loan> {
        if payment <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment must be positive".to_string(),
            )));
        }
        let mut loan = self.get_owned(user_id, loan_id).await?;
        loan.paid_amount += payment;
        debug!(
            "Recording payment of {} on loan {} (paid {} of {})",
            payment, loan.id, loan.paid_amount, loan.amount
        );
        self.repository.update(loan).await
    }

    async fn delete_loan(&self, user_id: &str, loan_id: &str) -> Result<()> {
        let loan = self.get_owned(user_id, loan_id).await?;
        self.repository.delete(&loan.id).await?;
        Ok(())
    }

    async fn list_loans(&self, user_id: &str) -> Result<Vec<Loan>> {
        self.repository.list_by_user(user_id).await
    }
}
