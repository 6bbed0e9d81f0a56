//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical persistent record for a note.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `updated_at >= created_at` for every stored record.
//! - `tags` holds no duplicate values (case-sensitive, exact match).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record as produced by a store.
///
/// Timestamps are Unix epoch milliseconds. Wire names are camelCase to match
/// the JSON surface consumed by the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID assigned by the store at creation.
    pub id: NoteId,
    /// Non-empty note title.
    pub title: String,
    /// Note body, at least 10 characters.
    pub content: String,
    /// Deduplicated tags, first-seen order preserved. May be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set exactly once, at creation.
    pub created_at: i64,
    /// Set at creation and refreshed on every successful update.
    pub updated_at: i64,
}
