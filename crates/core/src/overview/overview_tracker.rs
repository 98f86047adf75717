//! Caller-facing overview state: loading, error, and refresh.

use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::overview_model::{FinancialOverview, OverviewSnapshot};
use super::overview_traits::FinancialOverviewServiceTrait;
use crate::constants::OVERVIEW_FETCH_FAILED;

#[derive(Default)]
struct TrackerState {
    overview: Option<FinancialOverview>,
    error: Option<String>,
    /// Sequence number of the most recent pass whose result was applied
    applied_pass: u64,
    /// Number of passes currently in flight
    in_flight: u64,
}

/// Decrements the in-flight counter when a pass ends, however it ends.
///
/// A pass that panics or is cancelled at an await point must still stop
/// counting as in flight, or `loading` would stay true forever.
struct InFlightGuard<'a> {
    state: &'a RwLock<TrackerState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.write() {
            state.in_flight -= 1;
        }
    }
}

/// Holds the displayed overview across refreshes.
///
/// Each refresh is tagged with a sequence number taken when the pass
/// starts; a pass that finishes after a younger one has already been
/// applied is discarded whole, so two overlapping passes can never blend
/// their sums.
pub struct OverviewTracker {
    service: Arc<dyn FinancialOverviewServiceTrait>,
    state: RwLock<TrackerState>,
    next_pass: AtomicU64,
}

impl OverviewTracker {
    /// Creates a new OverviewTracker instance.
    pub fn new(service: Arc<dyn FinancialOverviewServiceTrait>) -> Self {
        Self {
            service,
            state: RwLock::new(TrackerState::default()),
            next_pass: AtomicU64::new(0),
        }
    }

    /// Returns the current state without triggering a pass.
    pub fn snapshot(&self) -> OverviewSnapshot {
        let state = self.state.read().unwrap();
        OverviewSnapshot {
            overview: state.overview.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
        }
    }

    /// Runs one aggregation pass and returns the resulting state.
    ///
    /// With no authenticated user this is a no-op: the prior state is
    /// retained, neither cleared nor marked as failed. On failure the last
    /// successfully computed overview stays displayed and `error` carries
    /// a generic message; the detail is only logged.
    pub async fn refresh(&self, user_id: Option<&str>) -> OverviewSnapshot {
        let Some(user_id) = user_id else {
            return self.snapshot();
        };

        let pass = self.next_pass.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().unwrap();
            state.in_flight += 1;
        }
        let in_flight = InFlightGuard { state: &self.state };

        let result = self.service.compute_overview(user_id).await;
        drop(in_flight);

        let mut state = self.state.write().unwrap();
        if pass > state.applied_pass {
            state.applied_pass = pass;
            match result {
                Ok(overview) => {
                    state.overview = Some(overview);
                    state.error = None;
                }
                Err(e) => {
                    error!("Financial overview pass {} failed: {}", pass, e);
                    state.error = Some(OVERVIEW_FETCH_FAILED.to_string());
                }
            }
        } else {
            debug!("Discarding stale overview pass {}", pass);
        }

        OverviewSnapshot {
            overview: state.overview.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
        }
    }
}
