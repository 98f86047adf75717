//! Financial overview module.
//!
//! This module provides the aggregation pass that reduces a user's books,
//! expenses, loans, deposits, and budgets into a single derived summary,
//! plus the caller-facing tracker that exposes loading/error state.

mod overview_model;
mod overview_service;
mod overview_tracker;
mod overview_traits;

pub use overview_model::*;
pub use overview_service::*;
pub use overview_tracker::*;
pub use overview_traits::*;

#[cfg(test)]
mod overview_tracker_tests;
