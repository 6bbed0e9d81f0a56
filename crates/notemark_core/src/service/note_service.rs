//! Note use-case facade.
//!
//! # Responsibility
//! - Provide the single entry point other layers call for note operations.
//! - Run every write through draft validation before touching the store.
//! - Convert unexpected storage failures into one typed outcome and log them.
//!
//! # Invariants
//! - Validation and `NotFound` are expected, typed results; they are never
//!   swallowed or downgraded to generic failures.
//! - The facade holds no state beyond the store it forwards to.

use crate::model::draft::{NoteDraft, ValidationErrors};
use crate::model::note::{Note, NoteId};
use crate::search::filter_notes;
use crate::store::{NoteStore, StoreError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft was rejected; field-level messages for the caller to re-prompt.
    Validation(ValidationErrors),
    /// Target note does not exist.
    NotFound(NoteId),
    /// Underlying persistence failed; callers surface a generic message.
    Storage(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "invalid note data: {errors}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Storage(err) => write!(f, "note storage unavailable: {err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Facade orchestrating validation, store mutation and search.
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service over the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates a draft and inserts it as a new note.
    pub fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, NoteServiceError> {
        let valid = draft.validate().map_err(|errors| {
            warn!(
                "event=note_create status=rejected fields={}",
                errors.fields().join(",")
            );
            NoteServiceError::Validation(errors)
        })?;

        match self.store.create(&valid) {
            Ok(note) => {
                info!("event=note_create status=ok note_id={}", note.id);
                Ok(note)
            }
            Err(err) => Err(storage_failure("note_create", err)),
        }
    }

    /// Validates a draft and replaces the note stored under `id`.
    pub fn update_note(&mut self, id: NoteId, draft: &NoteDraft) -> Result<Note, NoteServiceError> {
        let valid = draft.validate().map_err(|errors| {
            warn!(
                "event=note_update status=rejected note_id={id} fields={}",
                errors.fields().join(",")
            );
            NoteServiceError::Validation(errors)
        })?;

        match self.store.update(id, &valid) {
            Ok(note) => {
                info!("event=note_update status=ok note_id={id}");
                Ok(note)
            }
            Err(err) => Err(storage_failure("note_update", err)),
        }
    }

    /// Gets one note by id; unknown ids are `Ok(None)`.
    pub fn get_note(&self, id: NoteId) -> Result<Option<Note>, NoteServiceError> {
        self.store
            .get(id)
            .map_err(|err| storage_failure("note_get", err))
    }

    /// Deletes one note permanently.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        match self.store.delete(id) {
            Ok(()) => {
                info!("event=note_delete status=ok note_id={id}");
                Ok(())
            }
            Err(err) => Err(storage_failure("note_delete", err)),
        }
    }

    /// Lists all notes, newest first, optionally filtered by a search query.
    ///
    /// The filtered view is recomputed from the full list on every call
    /// rather than patched incrementally.
    pub fn list_notes(&self, query: Option<&str>) -> Result<Vec<Note>, NoteServiceError> {
        let notes = self
            .store
            .list()
            .map_err(|err| storage_failure("note_list", err))?;
        Ok(filter_notes(notes, query.unwrap_or("")))
    }
}

fn storage_failure(operation: &str, err: StoreError) -> NoteServiceError {
    if !matches!(err, StoreError::NotFound(_)) {
        error!("event={operation} status=error error={err}");
    }
    NoteServiceError::from(err)
}
