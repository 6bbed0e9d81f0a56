//! Volatile in-memory note store.
//!
//! # Responsibility
//! - Back the single-process/offline deployment mode with a plain map.
//!
//! # Invariants
//! - Insertion sequence numbers grow strictly monotonically for the store
//!   lifetime and break `created_at` ties in `list`.

use crate::model::draft::ValidNote;
use crate::model::note::{Note, NoteId};
use crate::store::{now_ms, NoteStore, StoreError, StoreResult};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredNote {
    seq: u64,
    note: Note,
}

/// Map-backed store. State is lost on drop; callers that need durability use
/// [`crate::store::sqlite::SqliteNoteStore`] instead.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: HashMap<NoteId, StoredNote>,
    next_seq: u64,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryNoteStore {
    fn create(&mut self, valid: &ValidNote) -> StoreResult<Note> {
        let now = now_ms();
        let note = Note {
            id: Uuid::new_v4(),
            title: valid.title.clone(),
            content: valid.content.clone(),
            tags: valid.tags.clone(),
            created_at: now,
            updated_at: now,
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.notes.insert(
            note.id,
            StoredNote {
                seq,
                note: note.clone(),
            },
        );

        Ok(note)
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        Ok(self.notes.get(&id).map(|stored| stored.note.clone()))
    }

    fn list(&self) -> StoreResult<Vec<Note>> {
        let mut rows: Vec<&StoredNote> = self.notes.values().collect();
        rows.sort_by(|a, b| {
            b.note
                .created_at
                .cmp(&a.note.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(rows.into_iter().map(|stored| stored.note.clone()).collect())
    }

    fn update(&mut self, id: NoteId, valid: &ValidNote) -> StoreResult<Note> {
        let stored = self.notes.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        stored.note.title = valid.title.clone();
        stored.note.content = valid.content.clone();
        stored.note.tags = valid.tags.clone();
        stored.note.updated_at = now_ms();
        Ok(stored.note.clone())
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        match self.notes.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}
