use std::path::Path;
use std::sync::Arc;

use tower_sessions::cookie::Key;

use journal_core::storage::{EntryStore, SqliteStorage};
use journal_core::SharedSecrets;

use crate::config::Settings;
use crate::session::signing_key;

use super::AppError;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    session_key: Key,
}

impl AppState {
    /// Create the schema if needed and derive the session signing key.
    ///
    /// This is the only place the schema is initialized; requests assume the
    /// table exists.
    pub fn initialize(settings: Settings) -> anyhow::Result<Self> {
        init_schema(&settings.database_path)?;
        let session_key = signing_key(settings.secret_key.as_deref())?;
        Ok(Self {
            settings: Arc::new(settings),
            session_key,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn secrets(&self) -> &SharedSecrets {
        &self.settings.secrets
    }

    pub fn session_key(&self) -> &Key {
        &self.session_key
    }

    /// Run one store operation on a freshly opened connection.
    ///
    /// The connection is opened and closed on the blocking pool; nothing is
    /// shared between requests.
    pub async fn with_storage<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut SqliteStorage) -> journal_core::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let settings = Arc::clone(&self.settings);
        tokio::task::spawn_blocking(move || -> Result<T, AppError> {
            let mut storage = SqliteStorage::open(&settings.database_path)?;
            let output = op(&mut storage)?;
            storage.close()?;
            Ok(output)
        })
        .await?
    }
}

/// Open the database once and make sure the entries table exists.
pub fn init_schema(path: &Path) -> anyhow::Result<()> {
    let storage = SqliteStorage::open(path)?;
    storage.ensure_schema()?;
    storage.close()?;
    tracing::debug!(path = %path.display(), "Database schema ready");
    Ok(())
}
