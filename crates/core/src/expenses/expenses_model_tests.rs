//! Tests for expense domain models including wire coercion.

use crate::expenses::{EntryType, Expense};
use rust_decimal_macros::dec;

// ==================== EntryType Serialization Tests ====================

#[test]
fn test_entry_type_serialization() {
    assert_eq!(serde_json::to_string(&EntryType::In).unwrap(), "\"in\"");
    assert_eq!(serde_json::to_string(&EntryType::Out).unwrap(), "\"out\"");
}

#[test]
fn test_entry_type_deserialization() {
    assert_eq!(
        serde_json::from_str::<EntryType>("\"in\"").unwrap(),
        EntryType::In
    );
    assert_eq!(
        serde_json::from_str::<EntryType>("\"out\"").unwrap(),
        EntryType::Out
    );
}

#[test]
fn test_entry_type_unknown_value_falls_back_to_out() {
    assert_eq!(
        serde_json::from_str::<EntryType>("\"transfer\"").unwrap(),
        EntryType::Out
    );
}

#[test]
fn test_entry_type_default() {
    assert_eq!(EntryType::default(), EntryType::Out);
}

// ==================== Amount Coercion Tests ====================

fn expense_from_json(json: &str) -> Expense {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_numeric_amount_parses() {
    let expense = expense_from_json(
        r#"{"id":"e1","bookId":"b1","amount":42.5,"type":"in","note":null,"createdAt":"2024-01-01T00:00:00"}"#,
    );
    assert_eq!(expense.amount, dec!(42.5));
    assert_eq!(expense.entry_type, EntryType::In);
}

#[test]
fn test_string_amount_parses() {
    let expense = expense_from_json(
        r#"{"id":"e1","bookId":"b1","amount":"17.25","type":"out","note":null,"createdAt":"2024-01-01T00:00:00"}"#,
    );
    assert_eq!(expense.amount, dec!(17.25));
}

#[test]
fn test_garbage_amount_coerces_to_zero() {
    let expense = expense_from_json(
        r#"{"id":"e1","bookId":"b1","amount":"not a number","type":"out","note":null,"createdAt":"2024-01-01T00:00:00"}"#,
    );
    assert_eq!(expense.amount, dec!(0));
}

#[test]
fn test_null_amount_coerces_to_zero() {
    let expense = expense_from_json(
        r#"{"id":"e1","bookId":"b1","amount":null,"type":"out","note":null,"createdAt":"2024-01-01T00:00:00"}"#,
    );
    assert_eq!(expense.amount, dec!(0));
}

#[test]
fn test_missing_type_defaults_to_out() {
    let expense = expense_from_json(
        r#"{"id":"e1","bookId":"b1","amount":10,"note":null,"createdAt":"2024-01-01T00:00:00"}"#,
    );
    assert_eq!(expense.entry_type, EntryType::Out);
}

// ==================== Signed Amount Tests ====================

#[test]
fn test_signed_amount_in_adds() {
    let expense = Expense {
        amount: dec!(100),
        entry_type: EntryType::In,
        ..Default::default()
    };
    assert_eq!(expense.signed_amount(), dec!(100));
    assert_eq!(expense.out_amount(), dec!(0));
}

#[test]
fn test_signed_amount_out_subtracts() {
    let expense = Expense {
        amount: dec!(30),
        entry_type: EntryType::Out,
        ..Default::default()
    };
    assert_eq!(expense.signed_amount(), dec!(-30));
    assert_eq!(expense.out_amount(), dec!(30));
}
