//! Entry store trait definition.
//!
//! The `EntryStore` trait defines the interface that every storage backend
//! must implement. The web layer is written against this trait only.

use super::types::{Entry, EntryId, NewEntry};
use crate::error::Result;

/// Persistent collection of journal entries.
///
/// All implementations must ensure:
/// - Ids are assigned by the store, increase monotonically, and are never reused
/// - Entries that fail `NewEntry::validate` are never persisted
/// - Entries are never modified after insertion
pub trait EntryStore {
    /// Create the backing table if it does not exist.
    ///
    /// Idempotent; calling it on an initialized store has no effect.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the id assigned to the created entry.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if the title or content is empty.
    /// Nothing is written in that case.
    fn create(&mut self, entry: &NewEntry) -> Result<EntryId>;

    /// List every entry, newest `created_at` first.
    ///
    /// Entries sharing a timestamp are ordered by descending id.
    fn list_all(&self) -> Result<Vec<Entry>>;

    /// Get an entry by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Delete the entry with the given id.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was removed. A missing id is not an error.
    fn delete(&mut self, id: EntryId) -> Result<bool>;
}
