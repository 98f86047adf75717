//! Unit tests for the overview tracker.

use super::*;
use crate::constants::OVERVIEW_FETCH_FAILED;
use crate::errors::{Result, StoreError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

fn overview(marker: u32) -> FinancialOverview {
    FinancialOverview {
        total_net_worth: Decimal::from(marker),
        books_count: marker as usize,
        ..Default::default()
    }
}

fn fetch_failure() -> crate::Error {
    StoreError::QueryFailed("loans offline".to_string()).into()
}

// ============================================================================
// Mock services
// ============================================================================

/// Replays a fixed sequence of pass results.
struct ScriptedService {
    responses: Mutex<VecDeque<Result<FinancialOverview>>>,
}

impl ScriptedService {
    fn new(responses: Vec<Result<FinancialOverview>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
        })
    }
}

#[async_trait]
impl FinancialOverviewServiceTrait for ScriptedService {
    async fn compute_overview(&self, _user_id: &str) -> Result<FinancialOverview> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

/// Parks the first pass on a gate so a later pass can overtake it.
struct GatedService {
    gate: Notify,
    entered: Notify,
    calls: AtomicUsize,
    first: FinancialOverview,
    second: FinancialOverview,
}

impl GatedService {
    fn new(first: FinancialOverview, second: FinancialOverview) -> Arc<Self> {
        Arc::new(Self {
            gate: Notify::new(),
            entered: Notify::new(),
            calls: AtomicUsize::new(0),
            first,
            second,
        })
    }
}

#[async_trait]
impl FinancialOverviewServiceTrait for GatedService {
    async fn compute_overview(&self, _user_id: &str) -> Result<FinancialOverview> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.entered.notify_one();
            self.gate.notified().await;
            Ok(self.first.clone())
        } else {
            Ok(self.second.clone())
        }
    }
}

/// Fails the test if any pass runs at all.
struct RefusingService;

#[async_trait]
impl FinancialOverviewServiceTrait for RefusingService {
    async fn compute_overview(&self, _user_id: &str) -> Result<FinancialOverview> {
        panic!("no pass should have been started");
    }
}

/// Panics mid-pass, as a buggy service implementation would.
struct CrashingService;

#[async_trait]
impl FinancialOverviewServiceTrait for CrashingService {
    async fn compute_overview(&self, _user_id: &str) -> Result<FinancialOverview> {
        panic!("service crashed");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_applies_computed_overview() {
    let service = ScriptedService::new(vec![Ok(overview(1))]);
    let tracker = OverviewTracker::new(service);

    let snapshot = tracker.refresh(Some("user-1")).await;

    assert_eq!(snapshot.overview, Some(overview(1)));
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_failed_refresh_preserves_previous_overview() {
    let service = ScriptedService::new(vec![Ok(overview(1)), Err(fetch_failure())]);
    let tracker = OverviewTracker::new(service);

    tracker.refresh(Some("user-1")).await;
    let snapshot = tracker.refresh(Some("user-1")).await;

    assert_eq!(snapshot.overview, Some(overview(1)));
    assert_eq!(snapshot.error.as_deref(), Some(OVERVIEW_FETCH_FAILED));
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_successful_refresh_clears_error() {
    let service = ScriptedService::new(vec![Err(fetch_failure()), Ok(overview(2))]);
    let tracker = OverviewTracker::new(service);

    let failed = tracker.refresh(Some("user-1")).await;
    assert!(failed.error.is_some());
    assert!(failed.overview.is_none());

    let snapshot = tracker.refresh(Some("user-1")).await;
    assert_eq!(snapshot.overview, Some(overview(2)));
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_refresh_without_session_is_a_noop() {
    let tracker = OverviewTracker::new(Arc::new(RefusingService));

    let snapshot = tracker.refresh(None).await;

    assert!(snapshot.overview.is_none());
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_refresh_without_session_retains_prior_overview() {
    let service = ScriptedService::new(vec![Ok(overview(3))]);
    let tracker = OverviewTracker::new(service);

    tracker.refresh(Some("user-1")).await;
    let snapshot = tracker.refresh(None).await;

    assert_eq!(snapshot.overview, Some(overview(3)));
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_panicking_pass_leaves_tracker_usable() {
    let tracker = Arc::new(OverviewTracker::new(Arc::new(CrashingService)));

    let pass = {
        let tracker = Arc::clone(&tracker);
        tokio::spawn(async move { tracker.refresh(Some("user-1")).await })
    };
    assert!(pass.await.is_err());

    // The crashed pass no longer counts as in flight and the state is
    // still readable.
    let snapshot = tracker.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.overview.is_none());
}

#[tokio::test]
async fn test_overlapping_refreshes_do_not_blend() {
    let service = GatedService::new(overview(1), overview(2));
    let tracker = Arc::new(OverviewTracker::new(service.clone()));

    // First pass starts and parks inside the service.
    let first = {
        let tracker = Arc::clone(&tracker);
        tokio::spawn(async move { tracker.refresh(Some("user-1")).await })
    };
    service.entered.notified().await;
    assert!(tracker.snapshot().loading);

    // Second pass overtakes and is applied; the first is still in flight.
    let second = tracker.refresh(Some("user-1")).await;
    assert_eq!(second.overview, Some(overview(2)));
    assert!(second.loading);

    // First pass completes late and must be discarded whole.
    service.gate.notify_one();
    let late = first.await.unwrap();
    assert_eq!(late.overview, Some(overview(2)));
    assert!(!late.loading);
    assert!(late.error.is_none());

    assert_eq!(tracker.snapshot().overview, Some(overview(2)));
}
