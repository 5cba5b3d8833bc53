//! Day record, history entry and application state.
//!
//! # Responsibility
//! - Model one mutable "today" record plus the bounded archive of prior days.
//! - Provide the archival filter that decides whether a finished day carries
//!   enough signal to be kept in history.
//!
//! # Invariants
//! - Serialized field names match the persisted blob layout (`today`,
//!   `control.items`, `minimalAction`, ...); changing a rename here changes
//!   the on-disk format.
//! - `history` is ordered most-recent-first and holds at most `HISTORY_CAP`
//!   entries; the cap is enforced at rollover time, never here.

use serde::{Deserialize, Serialize};

/// Maximum number of archived days retained in history.
pub const HISTORY_CAP: usize = 7;

/// Ordered free-form list of "what I control today" entries.
///
/// Insertion order is meaningful and duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlList {
    #[serde(default)]
    pub items: Vec<String>,
}

/// Relationship notes for the day. Free text, may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationships {
    #[serde(default)]
    pub external_expectation: String,
    #[serde(default)]
    pub need_to_protect: String,
}

/// Family notes for the day. Free text, may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    #[serde(default)]
    pub they_expect: String,
    #[serde(default)]
    pub i_decide: String,
}

/// The single minimal action chosen for the day and its completion flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalAction {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub completed: bool,
}

/// The mutable record for the current day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day key `YYYY-MM-DD` in the device-local timezone. Stored as `today`
    /// in the blob.
    #[serde(rename = "today")]
    pub date: String,
    #[serde(default)]
    pub control: ControlList,
    #[serde(default)]
    pub relationships: Relationships,
    #[serde(default)]
    pub family: Family,
    #[serde(rename = "minimalAction", default)]
    pub minimal_action: MinimalAction,
}

/// Immutable snapshot of an archived day.
///
/// Relationship and family notes are deliberately not archived; they only
/// count as activity signal at archival time (see [`DayRecord::archive`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    #[serde(default)]
    pub control: Vec<String>,
    #[serde(rename = "minimalAction", default)]
    pub minimal_action: MinimalAction,
}

/// Full persisted application state: the current day plus bounded history.
///
/// The current record's fields serialize inline at the top level of the blob,
/// next to `history`, matching the original single-key layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(flatten)]
    pub current: DayRecord,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl DayRecord {
    /// Creates an empty record for the given day key.
    pub fn empty(date_key: impl Into<String>) -> Self {
        Self {
            date: date_key.into(),
            ..Self::default()
        }
    }

    /// Returns whether anything was written into this record today.
    ///
    /// # Contract
    /// - Probes `control.items`, `minimal_action.action`,
    ///   `relationships.external_expectation` and `family.they_expect`.
    /// - `relationships.need_to_protect` and `family.i_decide` are not probed;
    ///   a day that only filled those is still treated as empty.
    pub fn has_signal(&self) -> bool {
        !self.control.items.is_empty()
            || !is_blank(&self.minimal_action.action)
            || !is_blank(&self.relationships.external_expectation)
            || !is_blank(&self.family.they_expect)
    }

    /// Archival filter: snapshots this record into a history entry, or `None`
    /// when the day carries no signal and should be skipped.
    ///
    /// The probed relationship/family fields act only as an activity signal;
    /// they are not copied into the resulting entry.
    pub fn archive(&self) -> Option<HistoryEntry> {
        if !self.has_signal() {
            return None;
        }
        Some(HistoryEntry {
            date: self.date.clone(),
            control: self.control.items.clone(),
            minimal_action: self.minimal_action.clone(),
        })
    }
}

impl AppState {
    /// Default state for a first access: empty record dated `date_key`, empty
    /// history.
    pub fn default_for(date_key: impl Into<String>) -> Self {
        Self {
            current: DayRecord::empty(date_key),
            history: Vec::new(),
        }
    }
}

/// Returns whether `value` is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
