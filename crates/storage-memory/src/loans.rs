//! In-memory loan repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use cashbooks_core::errors::{Result, StoreError};
use cashbooks_core::loans::{Loan, LoanRepositoryTrait, NewLoan};

/// Loan repository backed by a concurrent map keyed by loan id.
#[derive(Default)]
pub struct LoanRepository {
    loans: DashMap<String, Loan>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn create(&self, new_loan: NewLoan) -> Result<Loan> {
        let loan = Loan {
            id: new_loan.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            owner_id: new_loan.owner_id,
            name: new_loan.name,
            amount: new_loan.amount,
            paid_amount: new_loan.paid_amount,
            created_at: Utc::now().naive_utc(),
        };
        self.loans.insert(loan.id.clone(), loan.clone());
        Ok(loan)
    }

    async fn update(&self, loan: Loan) -> Result<Loan> {
        if !self.loans.contains_key(&loan.id) {
            return Err(StoreError::NotFound(format!("Loan {}", loan.id)).into());
        }
        self.loans.insert(loan.id.clone(), loan.clone());
        Ok(loan)
    }

    async fn delete(&self, loan_id: &str) -> Result<usize> {
        Ok(self.loans.remove(loan_id).map_or(0, |_| 1))
    }

    async fn get_by_id(&self, loan_id: &str) -> Result<Loan> {
        self.loans
            .get(loan_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(format!("Loan {}", loan_id)).into())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Loan>> {
        let mut loans: Vec<Loan> = self
            .loans
            .iter()
            .filter(|entry| entry.value().owner_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        loans.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(loans)
    }
}
