//! Core domain logic for Notemark.
//! This crate is the single source of truth for note business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{NoteDraft, ValidNote, ValidationErrors};
pub use model::note::{Note, NoteId};
pub use search::filter_notes;
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::memory::MemoryNoteStore;
pub use store::sqlite::SqliteNoteStore;
pub use store::{NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
