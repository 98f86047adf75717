//! End-to-end tests: services and overview tracker wired over the
//! in-memory store.

use std::sync::Arc;

use cashbooks_core::books::{BookService, BookServiceTrait, NewBook};
use cashbooks_core::budgets::{BudgetService, BudgetServiceTrait, NewBudget};
use cashbooks_core::deposits::{DepositService, DepositServiceTrait, NewFixedDeposit};
use cashbooks_core::expenses::{EntryType, ExpenseService, ExpenseServiceTrait, NewExpense};
use cashbooks_core::loans::{LoanService, LoanServiceTrait, NewLoan};
use cashbooks_core::overview::{FinancialOverviewService, OverviewTracker};
use cashbooks_storage_memory::MemoryStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const OWNER: &str = "user-1";

struct App {
    books: BookService,
    expenses: ExpenseService,
    loans: LoanService,
    deposits: DepositService,
    budgets: BudgetService,
    tracker: OverviewTracker,
}

fn app() -> App {
    let store = MemoryStore::new();
    let overview_service = Arc::new(FinancialOverviewService::new(
        store.books(),
        store.expenses(),
        store.loans(),
        store.deposits(),
        store.budgets(),
    ));
    App {
        books: BookService::new(store.books(), store.expenses()),
        expenses: ExpenseService::new(store.expenses(), store.books()),
        loans: LoanService::new(store.loans()),
        deposits: DepositService::new(store.deposits()),
        budgets: BudgetService::new(store.budgets(), store.books()),
        tracker: OverviewTracker::new(overview_service),
    }
}

fn new_book(name: &str) -> NewBook {
    NewBook {
        id: None,
        owner_id: OWNER.to_string(),
        name: name.to_string(),
    }
}

fn new_expense(book_id: &str, amount: Decimal, entry_type: EntryType) -> NewExpense {
    NewExpense {
        id: None,
        book_id: book_id.to_string(),
        amount,
        entry_type,
        note: None,
    }
}

#[tokio::test]
async fn test_full_overview_flow() {
    let app = app();

    let book_a = app.books.create_book(new_book("Household")).await.unwrap();
    let book_b = app.books.create_book(new_book("Travel")).await.unwrap();

    app.expenses
        .add_expense(OWNER, new_expense(&book_a.id, dec!(100), EntryType::In))
        .await
        .unwrap();
    app.expenses
        .add_expense(OWNER, new_expense(&book_a.id, dec!(30), EntryType::Out))
        .await
        .unwrap();
    app.expenses
        .add_expense(OWNER, new_expense(&book_b.id, dec!(50), EntryType::Out))
        .await
        .unwrap();

    let loan = app
        .loans
        .create_loan(NewLoan {
            id: None,
            owner_id: OWNER.to_string(),
            name: "Car loan".to_string(),
            amount: dec!(200),
            paid_amount: dec!(50),
        })
        .await
        .unwrap();

    app.deposits
        .create_deposit(NewFixedDeposit {
            id: None,
            owner_id: OWNER.to_string(),
            name: "Bank FD".to_string(),
            principal_amount: dec!(1000),
        })
        .await
        .unwrap();

    app.budgets
        .create_budget(NewBudget {
            id: None,
            owner_id: OWNER.to_string(),
            book_id: book_a.id.clone(),
            amount: dec!(40),
        })
        .await
        .unwrap();

    let snapshot = app.tracker.refresh(Some(OWNER)).await;
    let overview = snapshot.overview.expect("overview computed");

    assert_eq!(overview.total_net_worth, dec!(870));
    assert_eq!(overview.total_liability, dec!(150));
    assert_eq!(overview.total_investments, dec!(1000));
    assert_eq!(overview.total_budget, dec!(40));
    assert_eq!(overview.total_spent, dec!(30));
    assert_eq!(overview.books_count, 2);
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());

    // Paying down the loan shrinks the liability on the next pass.
    app.loans
        .record_payment(OWNER, &loan.id, dec!(100))
        .await
        .unwrap();
    let overview = app
        .tracker
        .refresh(Some(OWNER))
        .await
        .overview
        .expect("overview recomputed");
    assert_eq!(overview.total_liability, dec!(50));
    assert_eq!(overview.total_net_worth, dec!(970));

    // Deleting the budgeted book drops its entries and its spend; the
    // budget keeps its allocation.
    app.books.delete_book(OWNER, &book_a.id).await.unwrap();
    let overview = app
        .tracker
        .refresh(Some(OWNER))
        .await
        .overview
        .expect("overview recomputed");
    assert_eq!(overview.books_count, 1);
    assert_eq!(overview.total_budget, dec!(40));
    assert_eq!(overview.total_spent, dec!(0));
    // Only book B's -50 remains: -50 + 1000 - 50
    assert_eq!(overview.total_net_worth, dec!(900));
}

#[tokio::test]
async fn test_books_are_scoped_to_their_owner() {
    let app = app();

    let book = app.books.create_book(new_book("Private")).await.unwrap();

    let listed = app.books.list_books("intruder").await.unwrap();
    assert!(listed.is_empty());

    let result = app
        .expenses
        .add_expense("intruder", new_expense(&book.id, dec!(10), EntryType::Out))
        .await;
    assert!(result.is_err());

    let result = app.expenses.list_expenses("intruder", &book.id).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_budget_requires_an_owned_book() {
    let app = app();

    let result = app
        .budgets
        .create_budget(NewBudget {
            id: None,
            owner_id: OWNER.to_string(),
            book_id: "missing".to_string(),
            amount: dec!(10),
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_negative_amounts_are_rejected() {
    let app = app();

    let book = app.books.create_book(new_book("Household")).await.unwrap();
    let result = app
        .expenses
        .add_expense(OWNER, new_expense(&book.id, dec!(-5), EntryType::Out))
        .await;
    assert!(result.is_err());

    let result = app
        .loans
        .create_loan(NewLoan {
            id: None,
            owner_id: OWNER.to_string(),
            name: "Bad".to_string(),
            amount: dec!(-1),
            paid_amount: dec!(0),
        })
        .await;
    assert!(result.is_err());
}
