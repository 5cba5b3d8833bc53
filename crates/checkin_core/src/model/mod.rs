//! Domain model for the daily check-in state.
//!
//! # Responsibility
//! - Define the canonical shapes for today's record, archived history and the
//!   full persisted application state.
//! - Keep serde field naming aligned with the persisted blob layout.
//!
//! # Invariants
//! - Exactly one `DayRecord` is current at any time; its `date` equals the day
//!   key of the most recent rolled access.
//! - `HistoryEntry` values are never mutated after archival, only prepended
//!   and eventually evicted by the retention cap.

pub mod day;
