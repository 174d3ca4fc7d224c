//! Storage abstraction for Journal.
//!
//! This module defines the `EntryStore` trait and core types for
//! persisting journal entries.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic; the web layer only talks to
//! `EntryStore`. The single shipped backend is a file-backed SQLite database
//! opened once per request and closed when the request finishes.
//!
//! Entries are immutable once written: there is no update operation, only
//! create, list, and delete by id.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteStorage;
pub use traits::EntryStore;
pub use types::{Entry, EntryId, NewEntry, TIMESTAMP_FORMAT};
