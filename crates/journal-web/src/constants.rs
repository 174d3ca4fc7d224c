//! Constants used throughout the web front end.

/// Defaults applied when neither the config file, the environment, nor the
/// command line sets a value.
pub mod defaults {
    pub const BIND: &str = "127.0.0.1:5000";
    pub const DATABASE: &str = "journal.db";
    pub const OWNER_NAME: &str = "Owner";
    pub const GUEST_NAME: &str = "Guest";
    pub const LOG_LEVEL: &str = "info";
}

/// Environment variables read on top of the config file.
pub mod env {
    pub const SECRET_KEY: &str = "SECRET_KEY";
    pub const OWNER_PASSWORD: &str = "APP_PASSWORD";
    pub const GUEST_PASSWORD: &str = "GF_PASSWORD";
    pub const OWNER_NAME: &str = "JOURNAL_OWNER_NAME";
    pub const GUEST_NAME: &str = "JOURNAL_GUEST_NAME";
    pub const BIND: &str = "JOURNAL_BIND";
    pub const DATABASE: &str = "JOURNAL_DB";
    pub const LOG_LEVEL: &str = "JOURNAL_LOG";
}

/// User-facing messages.
pub mod messages {
    pub const LOGIN_FAILED: &str = "Incorrect password, try again.";
    pub const FIELDS_REQUIRED: &str = "Both title and content are required.";
}

/// Name of the signed session cookie.
pub const SESSION_COOKIE: &str = "journal_session";

/// Longest accepted session idle timeout (one year).
pub const MAX_IDLE_TIMEOUT_MINUTES: u64 = 365 * 24 * 60;

/// Maximum accepted request body size (64 KiB).
pub const MAX_BODY_SIZE: usize = 65_536;
