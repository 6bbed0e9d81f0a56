//! SQLite-backed persistent note store.
//!
//! # Responsibility
//! - Provide the durable implementation of the `NoteStore` contract.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The connection has migrations fully applied before any data access.
//! - `tags` is persisted as a JSON array text column.
//! - Whole-record replacement updates; row-level atomicity from SQLite is
//!   sufficient, no application-level locking.

use crate::db::{open_db, open_db_in_memory};
use crate::model::draft::ValidNote;
use crate::model::note::{Note, NoteId};
use crate::store::{now_ms, NoteStore, StoreError, StoreResult};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    tags,
    created_at,
    updated_at
FROM notes";

/// Durable note store owning one migrated SQLite connection.
pub struct SqliteNoteStore {
    conn: Connection,
}

impl SqliteNoteStore {
    /// Opens (or creates) a note database file and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an in-memory database, useful for tests and throwaway sessions.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already migrated connection (see [`crate::db::open_db`]).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrow the underlying connection, e.g. to share it with the user repo.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl NoteStore for SqliteNoteStore {
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

        self.conn.execute(
            "INSERT INTO notes (id, title, content, tags, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                note.id.to_string(),
                note.title.as_str(),
                note.content.as_str(),
                encode_tags(&note.tags)?,
                note.created_at,
                note.updated_at,
            ],
        )?;

        Ok(note)
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY created_at DESC, seq DESC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn update(&mut self, id: NoteId, valid: &ValidNote) -> StoreResult<Note> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?2,
                content = ?3,
                tags = ?4,
                updated_at = ?5
             WHERE id = ?1;",
            params![
                id.to_string(),
                valid.title.as_str(),
                valid.content.as_str(),
                encode_tags(&valid.tags)?,
                now_ms(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        self.get(id)?.ok_or(StoreError::InvalidData(
            "updated note missing on read-back".to_string(),
        ))
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn encode_tags(tags: &[String]) -> StoreResult<String> {
    serde_json::to_string(tags)
        .map_err(|err| StoreError::InvalidData(format!("tags are not JSON-encodable: {err}")))
}

fn parse_note_row(row: &Row<'_>) -> StoreResult<Note> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| StoreError::InvalidData(format!("invalid uuid value `{id_text}` in notes.id")))?;

    let tags_text: String = row.get("tags")?;
    let tags: Vec<String> = serde_json::from_str(&tags_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid tags value `{tags_text}` in notes.tags"))
    })?;

    Ok(Note {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
        tags,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
