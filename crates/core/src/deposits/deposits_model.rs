//! Fixed deposit domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a fixed deposit held by a user.
///
/// Treated as an investment asset in the financial overview.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FixedDeposit {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub principal_amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new fixed deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedDeposit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_id: String,
    pub name: String,
    pub principal_amount: Decimal,
}

impl NewFixedDeposit {
    /// Validates the new deposit data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Deposit name cannot be empty".to_string(),
            )));
        }
        if self.principal_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Deposit principal cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
