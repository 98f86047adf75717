//! Financial overview service traits.

use async_trait::async_trait;

use super::overview_model::FinancialOverview;
use crate::errors::Result;

/// Trait defining the contract for financial overview aggregation.
#[async_trait]
pub trait FinancialOverviewServiceTrait: Send + Sync {
    /// Runs one full aggregation pass for the given user.
    ///
    /// Fetches every collection scoped to the user, reduces them into the
    /// derived summary, and returns it. Any fetch failure aborts the whole
    /// pass; there is no partial result.
    ///
    /// # Returns
    /// A `FinancialOverview` containing:
    /// - Net worth, liability, and investment totals
    /// - Budget allocation and derived spend
    /// - The number of books fetched
    async fn compute_overview(&self, user_id: &str) -> Result<FinancialOverview>;
}
