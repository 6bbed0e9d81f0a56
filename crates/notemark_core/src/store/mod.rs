//! Note store contracts and interchangeable implementations.
//!
//! # Responsibility
//! - Define the CRUD capability interface every note store must satisfy.
//! - Keep persistence details (SQL, maps) behind one trait boundary.
//!
//! # Invariants
//! - The volatile and SQLite stores are behaviorally indistinguishable to
//!   callers: same ordering, same `NotFound` semantics, same field handling.
//! - `list` is ordered by `created_at` descending; equal timestamps fall back
//!   to insertion sequence descending, so newest-inserted still wins.

use crate::db::DbError;
use crate::model::draft::ValidNote;
use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod memory;
pub mod sqlite;
pub mod users;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for note persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// The requested id does not exist in the store.
    NotFound(NoteId),
    /// Underlying database failure.
    Db(DbError),
    /// Persisted state cannot be decoded into a valid record.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
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

/// Capability interface for authoritative note state.
///
/// Mutating operations take validated fields only; validation happens in the
/// service layer before any store call.
pub trait NoteStore {
    /// Assigns a fresh id, stamps `created_at = updated_at = now`, inserts,
    /// and returns the stored record.
    fn create(&mut self, valid: &ValidNote) -> StoreResult<Note>;
    /// Returns the current record, or `None` for an unknown id.
    fn get(&self, id: NoteId) -> StoreResult<Option<Note>>;
    /// Returns all notes, newest first.
    fn list(&self) -> StoreResult<Vec<Note>>;
    /// Replaces title/content/tags and refreshes `updated_at`; `id` and
    /// `created_at` stay untouched. Fails with `NotFound` for unknown ids.
    fn update(&mut self, id: NoteId, valid: &ValidNote) -> StoreResult<Note>;
    /// Removes the record permanently. Fails with `NotFound` for unknown ids.
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;
}

impl<S: NoteStore + ?Sized> NoteStore for Box<S> {
    fn create(&mut self, valid: &ValidNote) -> StoreResult<Note> {
        (**self).create(valid)
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        (**self).get(id)
    }

    fn list(&self) -> StoreResult<Vec<Note>> {
        (**self).list()
    }

    fn update(&mut self, id: NoteId, valid: &ValidNote) -> StoreResult<Note> {
        (**self).update(id, valid)
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        (**self).delete(id)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub(crate) fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
