//! Persistent store adapter for the single application-state blob.
//!
//! # Responsibility
//! - Define the load/save contract every engine caller goes through.
//! - Isolate blob serialization and SQLite details from the rollover logic.
//!
//! # Invariants
//! - A missing or malformed blob loads as "no data", never as an error.
//! - Save failures are reported, not thrown; the caller's in-memory state
//!   stays usable for the session.

pub mod state_store;
