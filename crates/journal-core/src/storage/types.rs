//! Core data types for storage layer.

use chrono::{Local, NaiveDateTime};

use crate::error::{JournalError, Result};

/// Identifier of a stored entry (SQLite rowid, never reused).
pub type EntryId = i64;

/// Text format of `created_at`, both on disk and on screen.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique identifier for this entry
    pub id: EntryId,

    /// Entry title, never empty
    pub title: String,

    /// Entry body, never empty
    pub content: String,

    /// When this entry was created (server local time, second precision)
    pub created_at: NaiveDateTime,
}

impl Entry {
    /// `created_at` rendered in the storage format.
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Title; surrounding whitespace is ignored
    pub title: String,

    /// Content; surrounding whitespace is ignored
    pub content: String,

    /// Optional: fixed creation time instead of "now"
    pub created_at: Option<NaiveDateTime>,
}

impl NewEntry {
    /// Build a new entry, trimming surrounding whitespace from both fields.
    pub fn new(title: impl AsRef<str>, content: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            content: content.as_ref().trim().to_string(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Check that both title and content are present.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if either field is empty or only
    /// whitespace, however the value was built.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(JournalError::Validation(
                "Both title and content are required.".to_string(),
            ));
        }
        Ok(())
    }

    /// Creation timestamp to persist: the pinned one, or the current local
    /// time truncated to whole seconds.
    pub fn timestamp(&self) -> String {
        match self.created_at {
            Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
            None => Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
