//! Financial overview domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived financial summary for one user.
///
/// Recomputed in full on every aggregation pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialOverview {
    /// Book nets + investments - liabilities
    pub total_net_worth: Decimal,
    /// Outstanding loan principal (unclamped; can be negative)
    pub total_liability: Decimal,
    /// Fixed deposit principal
    pub total_investments: Decimal,
    /// Allocated across all budgets
    pub total_budget: Decimal,
    /// Book-wide out-spend of every budgeted book
    pub total_spent: Decimal,
    /// Number of books owned by the user
    pub books_count: usize,
}

/// Point-in-time view of the tracker state handed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    /// Last successfully computed overview, if any
    pub overview: Option<FinancialOverview>,
    /// True while at least one aggregation pass is in flight
    pub loading: bool,
    /// Generic failure message from the most recent applied pass
    pub error: Option<String>,
}
