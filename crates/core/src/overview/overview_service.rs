//! Financial overview aggregation service implementation.

use async_trait::async_trait;
use futures::future::join_all;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::overview_model::FinancialOverview;
use super::overview_traits::FinancialOverviewServiceTrait;
use crate::books::BookRepositoryTrait;
use crate::budgets::BudgetRepositoryTrait;
use crate::deposits::DepositRepositoryTrait;
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::loans::{Loan, LoanRepositoryTrait};

/// Service for computing the financial overview.
pub struct FinancialOverviewService {
    book_repository: Arc<dyn BookRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    loan_repository: Arc<dyn LoanRepositoryTrait>,
    deposit_repository: Arc<dyn DepositRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl FinancialOverviewService {
    /// Creates a new FinancialOverviewService instance.
    pub fn new(
        book_repository: Arc<dyn BookRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        loan_repository: Arc<dyn LoanRepositoryTrait>,
        deposit_repository: Arc<dyn DepositRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        Self {
            book_repository,
            expense_repository,
            loan_repository,
            deposit_repository,
            budget_repository,
        }
    }

    /// Sum of out-type entries for one book's cached expenses.
    fn out_total(expenses: &[Expense]) -> Decimal {
        expenses.iter().map(Expense::out_amount).sum()
    }
}

#[async_trait]
impl FinancialOverviewServiceTrait for FinancialOverviewService {
    async fn compute_overview(&self, user_id: &str) -> Result<FinancialOverview> {
        let books = self.book_repository.list_by_user(user_id).await?;

        debug!(
            "Computing financial overview for user {} across {} books",
            user_id,
            books.len()
        );

        // Fan out one expense fetch per book. The fetches are independent
        // reads with no ordering requirement among them.
        let expense_fetches = books.iter().map(|book| {
            let repository = Arc::clone(&self.expense_repository);
            let book_id = book.id.clone();
            async move {
                repository
                    .list_by_book(&book_id)
                    .await
                    .map(|expenses| (book_id, expenses))
            }
        });

        // Loan, deposit, and budget reads are independent of the per-book
        // fan-out and run alongside it. The budget reduction below has a
        // data dependency on the expense join, so it runs strictly after.
        let (expense_results, loans, deposits, budgets) = futures::join!(
            join_all(expense_fetches),
            self.loan_repository.list_by_user(user_id),
            self.deposit_repository.list_by_user(user_id),
            self.budget_repository.list_by_user(user_id),
        );
        let loans = loans?;
        let deposits = deposits?;
        let budgets = budgets?;

        // Ledger cache: book id -> its expense entries. Local to this pass;
        // reused by the budget reduction so no book is fetched twice.
        let mut ledger_cache: HashMap<String, Vec<Expense>> =
            HashMap::with_capacity(books.len());
        for result in expense_results {
            let (book_id, expenses) = result?;
            ledger_cache.insert(book_id, expenses);
        }

        let total_books_net: Decimal = ledger_cache
            .values()
            .flatten()
            .map(Expense::signed_amount)
            .sum();

        let total_liability: Decimal = loans.iter().map(Loan::outstanding).sum();

        let total_investments: Decimal =
            deposits.iter().map(|d| d.principal_amount).sum();

        let mut total_budget = Decimal::ZERO;
        let mut total_spent = Decimal::ZERO;
        for budget in &budgets {
            total_budget += budget.amount;
            // Spend is the budgeted book's total out-spend. A book missing
            // from the cache (deleted since the budget was created) counts
            // as zero.
            total_spent += ledger_cache
                .get(&budget.book_id)
                .map(|expenses| Self::out_total(expenses))
                .unwrap_or(Decimal::ZERO);
        }

        let total_net_worth = total_books_net + total_investments - total_liability;

        debug!(
            "Overview complete: net_worth={}, liability={}, investments={}, budget={}/{} spent",
            total_net_worth, total_liability, total_investments, total_spent, total_budget
        );

        // Totals are published exact; any display rounding belongs to the
        // view layer, so the net-worth identity always holds.
        Ok(FinancialOverview {
            total_net_worth,
            total_liability,
            total_investments,
            total_budget,
            total_spent,
            books_count: books.len(),
        })
    }
}
