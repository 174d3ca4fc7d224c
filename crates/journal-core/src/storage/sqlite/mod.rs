//! File-backed SQLite storage backend.
//!
//! A `SqliteStorage` wraps one connection. The web layer opens a fresh
//! storage per request and closes it before responding; SQLite's own locking
//! serializes concurrent writers, with a busy timeout so a second writer waits
//! instead of failing outright.

mod row;

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension};

use crate::error::{JournalError, Result};
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, EntryId, NewEntry};

use row::EntryRow;

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
"#;

/// SQLite storage engine.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file at `path`.
    ///
    /// Missing parent directories are created. The schema is not touched;
    /// call `ensure_schema` once at startup.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` if the directory or file cannot be
    /// created or opened.
    pub fn open(path: &Path) -> Result<Self> {
        crate::fs::ensure_parent_dir(path).map_err(|e| {
            JournalError::Storage(format!(
                "Cannot create directory for {}: {}",
                path.display(),
                e
            ))
        })?;

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Open a private in-memory database (tests and tooling).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Close the connection, reporting any error SQLite raises while closing.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err.into())
    }
}

impl EntryStore for SqliteStorage {
    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn create(&mut self, entry: &NewEntry) -> Result<EntryId> {
        entry.validate()?;

        self.conn.execute(
            "INSERT INTO entries (title, content, created_at) VALUES (?1, ?2, ?3)",
            (entry.title.trim(), entry.content.trim(), entry.timestamp()),
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {} FROM entries ORDER BY created_at DESC, id DESC",
            EntryRow::COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], EntryRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Entry::try_from(row?)?);
        }
        Ok(entries)
    }

    fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        let sql = format!("SELECT {} FROM entries WHERE id = ?1", EntryRow::COLUMNS);
        let row = self
            .conn
            .query_row(&sql, [id], EntryRow::from_row)
            .optional()?;
        row.map(Entry::try_from).transpose()
    }

    fn delete(&mut self, id: EntryId) -> Result<bool> {
        let removed = self.conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }
}
