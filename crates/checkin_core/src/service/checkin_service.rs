//! Rollover engine and module-scoped save operations.
//!
//! # Responsibility
//! - Detect stale "today" records, archive them into bounded history and
//!   reset the current day.
//! - Provide the load-modify-save entry points each check-in module uses.
//!
//! # Invariants
//! - `get_current` runs before every read or write, so callers always operate
//!   on a record dated today.
//! - History is mutated only inside the rollover step; everywhere else it is
//!   a read-only ledger.
//! - Persistence failures are logged and absorbed; the returned in-memory
//!   state is always correct for the session even when nothing persists.

use crate::clock::Clock;
use crate::model::day::{
    AppState, DayRecord, Family, HistoryEntry, MinimalAction, Relationships, HISTORY_CAP,
};
use crate::store::state_store::StateStore;
use log::{error, info};

/// Use-case service owning the daily lifecycle over an injected store and
/// clock.
pub struct CheckinService<S: StateStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: StateStore, C: Clock> CheckinService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Primary entry point: loads state, rolling it over first when the
    /// stored day is stale.
    ///
    /// # Contract
    /// - First access ever: constructs defaults dated today, persists, returns.
    /// - Same day: returns the stored state unchanged (fast path).
    /// - Stale day: archives the old record when it carries signal, prepends
    ///   the entry, truncates history to `HISTORY_CAP`, resets the current
    ///   record to an empty one dated today, persists.
    /// - One rollover per distinct stale date; skipped days are not
    ///   backfilled, only the single most recent stale day can be archived.
    pub fn get_current(&self) -> AppState {
        let today = self.clock.today_key();

        let Some(mut state) = self.store.load() else {
            let state = AppState::default_for(today.as_str());
            info!("event=state_init module=service status=ok today={today}");
            self.persist(&state, "state_init");
            return state;
        };

        if state.current.date == today {
            return state;
        }

        let stale = state.current.date.clone();
        let archived = match state.current.archive() {
            Some(entry) => {
                state.history.insert(0, entry);
                state.history.truncate(HISTORY_CAP);
                true
            }
            None => false,
        };
        state.current = DayRecord::empty(today.as_str());
        info!(
            "event=rollover module=service status=ok from={stale} to={today} archived={archived} history_len={}",
            state.history.len()
        );
        self.persist(&state, "rollover");
        state
    }

    /// Read-only view of the history ledger, most-recent-first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.get_current().history
    }

    /// Replaces the control list for the current day.
    pub fn save_control(&self, items: Vec<String>) -> AppState {
        let mut state = self.get_current();
        state.current.control.items = items;
        self.persist(&state, "save_control");
        state
    }

    /// Replaces the relationship notes for the current day.
    pub fn save_relationships(&self, relationships: Relationships) -> AppState {
        let mut state = self.get_current();
        state.current.relationships = relationships;
        self.persist(&state, "save_relationships");
        state
    }

    /// Replaces the family notes for the current day.
    pub fn save_family(&self, family: Family) -> AppState {
        let mut state = self.get_current();
        state.current.family = family;
        self.persist(&state, "save_family");
        state
    }

    /// Replaces the minimal action for the current day.
    pub fn save_minimal_action(&self, minimal_action: MinimalAction) -> AppState {
        let mut state = self.get_current();
        state.current.minimal_action = minimal_action;
        self.persist(&state, "save_minimal_action");
        state
    }

    fn persist(&self, state: &AppState, event: &str) {
        if let Err(err) = self.store.save(state) {
            error!("event={event} module=service status=error error_code=save_failed error={err}");
        }
    }
}
