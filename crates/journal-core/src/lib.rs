//! # Journal Core
//!
//! Core library for Journal - a small, password-gated personal journal served
//! over HTTP.
//!
//! This crate provides the domain types, the entry store abstraction and its
//! SQLite backend, and the shared-secret credential check, independent of the
//! web front end.
//!
//! ## Architecture
//!
//! - **storage**: Entry store trait, data types, and the SQLite implementation
//! - **auth**: Shared-secret login check and display-name resolution
//! - **error**: Error type shared by every core operation

pub mod auth;
pub mod error;
pub mod fs;
pub mod storage;

pub use auth::{Principal, Role, SharedSecrets};
pub use error::{JournalError, Result};
pub use storage::{Entry, EntryId, EntryStore, NewEntry, SqliteStorage};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
