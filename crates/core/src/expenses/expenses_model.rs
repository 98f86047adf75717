//! Expense domain models.
//!
//! Expense records come from a loosely typed document store, so the wire
//! format is tolerated rather than rejected: an unparsable amount coerces
//! to zero and a missing or unknown entry type defaults to `out`.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{errors::ValidationError, Error, Result};

/// Direction of an expense entry: cash-in (credit) or cash-out (debit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money added to the book
    In,
    /// Money spent from the book; also the fallback for missing or
    /// unrecognized values
    #[default]
    #[serde(other)]
    Out,
}

/// Domain model representing a single entry in a book.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub book_id: String,
    #[serde(default, deserialize_with = "coerce_amount")]
    pub amount: Decimal,
    #[serde(rename = "type", default)]
    pub entry_type: EntryType,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// The entry's contribution to its book's net: in adds, out subtracts.
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::In => self.amount,
            EntryType::Out => -self.amount,
        }
    }

    /// The entry's contribution to spend totals: out counts, in does not.
    pub fn out_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::In => Decimal::ZERO,
            EntryType::Out => self.amount,
        }
    }
}

/// Deserializes an amount from whatever the store holds.
///
/// Numbers and numeric strings parse normally; anything else coerces to
/// zero instead of failing the whole record.
fn coerce_amount<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Input model for recording a new expense entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub book_id: String,
    pub amount: Decimal,
    #[serde(rename = "type", default)]
    pub entry_type: EntryType,
    pub note: Option<String>,
}

impl NewExpense {
    /// Validates the new expense data.
    pub fn validate(&self) -> Result<()> {
        if self.book_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "bookId".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Expense amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
