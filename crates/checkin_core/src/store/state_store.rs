//! State store contract plus SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Persist the whole `AppState` as one JSON blob under a fixed key.
//! - Map corrupt or absent data to `None` on load (logged, not surfaced).
//!
//! # Invariants
//! - Last write wins; there is no transactional guarantee across saves.
//! - The blob key is stable; changing it orphans existing data.

use crate::db::DbError;
use crate::model::day::AppState;
use log::{error, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the application blob is stored under.
pub const STATE_KEY: &str = "sebastian_app_data";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error reported by `save`; `load` never errors (see trait docs).
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize state blob: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Load/save contract for the single application-state blob.
pub trait StateStore {
    /// Loads the persisted state.
    ///
    /// Returns `None` when no blob exists or when the stored blob cannot be
    /// read or parsed. Corrupt data is logged and treated as absent.
    fn load(&self) -> Option<AppState>;

    /// Serializes and persists the state. On failure the store is left in its
    /// previous condition and the error is returned for the caller to log.
    fn save(&self, state: &AppState) -> StoreResult<()>;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn load(&self) -> Option<AppState> {
        (**self).load()
    }

    fn save(&self, state: &AppState) -> StoreResult<()> {
        (**self).save(state)
    }
}

/// SQLite-backed store keeping the blob in the `kv` table.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load(&self) -> Option<AppState> {
        let raw = match self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                params![STATE_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()
        {
            Ok(raw) => raw?,
            Err(err) => {
                warn!("event=state_load module=store status=error error_code=read_failed error={err}");
                return None;
            }
        };

        parse_blob(&raw)
    }

    fn save(&self, state: &AppState) -> StoreResult<()> {
        let raw = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![STATE_KEY, raw],
        )?;
        Ok(())
    }
}

/// In-memory store double with the same corrupt-blob semantics.
///
/// Engine tests seed it with raw JSON to exercise the fallback paths without
/// a database; embeddings can use it for throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with a raw blob, bypassing serialization.
    pub fn seed_raw(&self, raw: impl Into<String>) {
        *self.slot.borrow_mut() = Some(raw.into());
    }

    /// Returns the raw persisted blob, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<AppState> {
        let slot = self.slot.borrow();
        parse_blob(slot.as_deref()?)
    }

    fn save(&self, state: &AppState) -> StoreResult<()> {
        let raw = serde_json::to_string(state)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

fn parse_blob(raw: &str) -> Option<AppState> {
    match serde_json::from_str(raw) {
        Ok(state) => Some(state),
        Err(err) => {
            error!(
                "event=state_load module=store status=error error_code=corrupt_blob error={err}"
            );
            None
        }
    }
}
