//! Domain model for user-authored notes.
//!
//! # Responsibility
//! - Define the canonical `Note` record shared by storage and HTTP layers.
//! - Gate every write through draft validation and normalization.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - A `Note` never exists without having passed draft validation first.

pub mod draft;
pub mod note;
