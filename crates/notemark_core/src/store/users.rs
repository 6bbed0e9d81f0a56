//! Authentication stub user repository.
//!
//! Backs the standalone `users` table. Nothing in the note flows touches it;
//! it exists for the separate login stub and its tests only.

use crate::store::{StoreError, StoreResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// Persistent user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// SQLite-backed user repository borrowing a migrated connection.
pub struct SqliteUserRepo<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepo<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts one user with a generated id. Duplicate usernames surface as
    /// a database error from the unique constraint.
    pub fn create_user(&self, username: &str, password: &str) -> StoreResult<UserRecord> {
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: password.to_string(),
        };

        self.conn.execute(
            "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3);",
            params![user.id.to_string(), user.username, user.password],
        )?;

        Ok(user)
    }

    pub fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, username, password FROM users WHERE id = ?1;")?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    pub fn get_user_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, username, password FROM users WHERE username = ?1;")?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }
}

fn parse_user_row(row: &Row<'_>) -> StoreResult<UserRecord> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| StoreError::InvalidData(format!("invalid uuid value `{id_text}` in users.id")))?;

    Ok(UserRecord {
        id,
        username: row.get("username")?,
        password: row.get("password")?,
    })
}
