//! Loan repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::loans_model::{Loan, NewLoan};
use crate::errors::Result;

/// Trait defining the contract for Loan repository operations.
#[async_trait]
pub trait LoanRepositoryTrait: Send + Sync {
    /// Creates a new loan, assigning an id when the input carries none.
    async fn create(&self, new_loan: NewLoan) -> Result<Loan>;

    /// Persists an updated loan.
    async fn update(&self, loan: Loan) -> Result<Loan>;

    /// Deletes a loan by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, loan_id: &str) -> Result<usize>;

    /// Retrieves a loan by its ID.
    async fn get_by_id(&self, loan_id: &str) -> Result<Loan>;

    /// Lists all loans owned by the given user.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Loan>>;
}

/// Trait defining the contract for Loan service operations.
#[async_trait]
pub trait LoanServiceTrait: Send + Sync {
    /// Creates a new loan with business validation.
    async fn create_loan(&self, new_loan: NewLoan) -> Result<Loan>;

    /// Records a payment against a loan the given user owns.
    ///
    /// Payments are not capped at the principal; overpayment is allowed.
    async fn record_payment(&self, user_id: &str, loan_id: &str, payment: Decimal) -> Result<Loan>;

    /// Deletes a loan the given user owns.
    async fn delete_loan(&self, user_id: &str, loan_id: &str) -> Result<()>;

    /// Lists all loans owned by the given user.
    async fn list_loans(&self, user_id: &str) -> Result<Vec<Loan>>;
}
