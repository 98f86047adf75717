//! Facade wiring every in-memory repository together.

use std::sync::Arc;

use cashbooks_core::books::BookRepositoryTrait;
use cashbooks_core::budgets::BudgetRepositoryTrait;
use cashbooks_core::deposits::DepositRepositoryTrait;
use cashbooks_core::expenses::ExpenseRepositoryTrait;
use cashbooks_core::loans::LoanRepositoryTrait;

use crate::books::BookRepository;
use crate::budgets::BudgetRepository;
use crate::deposits::DepositRepository;
use crate::expenses::ExpenseRepository;
use crate::loans::LoanRepository;

/// One in-memory document store: a set of repositories over shared
/// collections, handed out as trait objects ready for service wiring.
#[derive(Default)]
pub struct MemoryStore {
    books: Arc<BookRepository>,
    expenses: Arc<ExpenseRepository>,
    loans: Arc<LoanRepository>,
    deposits: Arc<DepositRepository>,
    budgets: Arc<BudgetRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> Arc<dyn BookRepositoryTrait> {
        self.books.clone()
    }

    pub fn expenses(&self) -> Arc<dyn ExpenseRepositoryTrait> {
        self.expenses.clone()
    }

    pub fn loans(&self) -> Arc<dyn LoanRepositoryTrait> {
        self.loans.clone()
    }

    pub fn deposits(&self) -> Arc<dyn DepositRepositoryTrait> {
        self.deposits.clone()
    }

    pub fn budgets(&self) -> Arc<dyn BudgetRepositoryTrait> {
        self.budgets.clone()
    }
}
