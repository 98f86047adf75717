//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a budget allocated against one book.
///
/// Spend against the budget is derived from the book's expenses at
/// aggregation time; it is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub owner_id: String,
    pub book_id: String,
    /// Allocated amount
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_id: String,
    pub book_id: String,
    pub amount: Decimal,
}

impl NewBudget {
    /// Validates the new budget data.
    pub fn validate(&self) -> Result<()> {
        if self.book_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "bookId".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
