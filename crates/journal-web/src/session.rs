//! Session gate.
//!
//! Sessions are held server-side in memory and identified by a signed
//! cookie. A session is authenticated once `establish` has stored a
//! `SessionUser` in it; `clear` throws the whole session away.
//!
//! Protected handlers call `require_login` first and return its redirect
//! when the caller is not logged in.

use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tower_sessions::cookie::Key;
use tower_sessions::session::Error as SessionError;
use tower_sessions::Session;

use journal_core::Principal;

/// Session key under which the login state is stored.
const SESSION_USER_KEY: &str = "journal.user";

/// Context string for deriving the cookie signing key.
const KEY_DERIVATION_CONTEXT: &str = "journal-web 2024-06 session cookie signing key";

/// Login state kept in an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub logged_in: bool,
    pub user: String,
}

/// Wraps a request's session with the login operations.
pub struct SessionGate {
    session: Session,
}

impl SessionGate {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Mark the session as logged in under the principal's display name.
    ///
    /// The session id is rotated first so an id issued before login is
    /// never the authenticated one.
    pub async fn establish(&self, principal: &Principal) -> Result<(), SessionError> {
        self.session.cycle_id().await?;
        self.session
            .insert(
                SESSION_USER_KEY,
                SessionUser {
                    logged_in: true,
                    user: principal.display_name.clone(),
                },
            )
            .await
    }

    async fn state(&self) -> Result<Option<SessionUser>, SessionError> {
        self.session.get::<SessionUser>(SESSION_USER_KEY).await
    }

    pub async fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.state().await?.is_some_and(|s| s.logged_in))
    }

    /// Display name of the logged-in user, if any.
    pub async fn current_user(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .state()
            .await?
            .filter(|s| s.logged_in)
            .map(|s| s.user))
    }

    /// Destroy the session (logout).
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.session.flush().await
    }

    /// Pre-check for protected routes.
    ///
    /// Returns `Some(redirect)` to the login page when the session is not
    /// authenticated, `None` when the handler may proceed.
    pub async fn require_login(&self) -> Result<Option<Redirect>, SessionError> {
        if self.is_authenticated().await? {
            Ok(None)
        } else {
            Ok(Some(Redirect::to("/login")))
        }
    }
}

/// Build the cookie signing key.
///
/// A configured secret is stretched into the 64 bytes the cookie signer
/// needs, so the same secret always yields the same key and sessions survive
/// restarts. Without a secret a random key is generated for this process.
pub fn signing_key(secret: Option<&str>) -> anyhow::Result<Key> {
    let mut material = [0u8; 64];
    match secret {
        Some(secret) => {
            let mut hasher = blake3::Hasher::new_derive_key(KEY_DERIVATION_CONTEXT);
            hasher.update(secret.as_bytes());
            hasher.finalize_xof().fill(&mut material);
        }
        None => getrandom::getrandom(&mut material)
            .map_err(|e| anyhow::anyhow!("Failed to generate session key: {}", e))?,
    }
    Ok(Key::from(&material))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_secret_gives_stable_key() {
        let a = signing_key(Some("correct horse")).unwrap();
        let b = signing_key(Some("correct horse")).unwrap();
        assert_eq!(a.master(), b.master());
    }

    #[test]
    fn test_different_secrets_give_different_keys() {
        let a = signing_key(Some("one")).unwrap();
        let b = signing_key(Some("two")).unwrap();
        assert_ne!(a.master(), b.master());
    }

    #[test]
    fn test_missing_secret_gives_random_key() {
        let a = signing_key(None).unwrap();
        let b = signing_key(None).unwrap();
        assert_ne!(a.master(), b.master());
    }
}
