//! Loan domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a loan taken by a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    /// Principal amount borrowed
    pub amount: Decimal,
    /// Amount repaid so far; may exceed the principal
    pub paid_amount: Decimal,
    pub created_at: NaiveDateTime,
}

impl Loan {
    /// The remaining liability on this loan.
    ///
    /// Deliberately unclamped: an overpaid loan contributes a negative
    /// liability.
    pub fn outstanding(&self) -> Decimal {
        self.amount - self.paid_amount
    }
}

/// Input model for creating a new loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_id: String,
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub paid_amount: Decimal,
}

impl NewLoan {
    /// Validates the new loan data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Loan name cannot be empty".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Loan principal cannot be negative".to_string(),
            )));
        }
        if self.paid_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Paid amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
