use crate::schemas::AppState;
use moka::future::Cache;
use std::time::Duration;

/// Initialize application configuration and state
pub fn initialize_app_state() -> AppState {
    // Initialize the memoization cache for calculator responses
    let cache = Cache::builder()
        .max_capacity(1_000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    AppState { cache }
}
