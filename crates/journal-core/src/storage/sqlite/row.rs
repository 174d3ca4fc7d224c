//! Entry row type for database queries.

use chrono::NaiveDateTime;

use crate::error::{JournalError, Result};
use crate::storage::types::{Entry, EntryId, TIMESTAMP_FORMAT};

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl EntryRow {
    pub const COLUMNS: &'static str = "id, title, content, created_at";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = JournalError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let created_at = NaiveDateTime::parse_from_str(&row.created_at, TIMESTAMP_FORMAT)
            .map_err(|e| {
                JournalError::Storage(format!(
                    "Invalid timestamp for entry {}: {}",
                    row.id, e
                ))
            })?;

        Ok(Entry {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at,
        })
    }
}
