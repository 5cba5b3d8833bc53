//! Core domain logic for the daily check-in tool.
//! This crate is the single source of truth for the day lifecycle invariants.

pub mod clock;
pub mod content;
pub mod db;
pub mod debounce;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use debounce::{SaveScheduler, Section, SAVE_DEBOUNCE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::day::{
    AppState, ControlList, DayRecord, Family, HistoryEntry, MinimalAction, Relationships,
    HISTORY_CAP,
};
pub use service::checkin_service::CheckinService;
pub use store::state_store::{
    MemoryStore, SqliteStateStore, StateStore, StoreError, StoreResult, STATE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
