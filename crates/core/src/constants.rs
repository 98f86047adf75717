/// Generic message surfaced to the caller when an overview pass fails
pub const OVERVIEW_FETCH_FAILED: &str = "Failed to load financial overview";
