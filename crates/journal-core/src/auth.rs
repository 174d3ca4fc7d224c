//! Shared-secret login check.
//!
//! The journal has no user table. Two configured passwords exist: one for the
//! owner and one for a guest. A login attempt is compared against both with
//! plain string equality, and the matching secret decides the display name
//! shown for the rest of the session.
//!
//! Passwords are neither hashed nor compared in constant time, and failed
//! attempts are not counted.

use std::fmt;

/// Which shared secret a session was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Guest,
}

/// A successfully authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub role: Role,
    pub display_name: String,
}

/// The two configured secrets and the display names attached to them.
#[derive(Clone)]
pub struct SharedSecrets {
    owner_password: Option<String>,
    guest_password: Option<String>,
    owner_name: String,
    guest_name: String,
}

impl SharedSecrets {
    /// Build the secret set. Empty passwords are treated as unset so that an
    /// empty submission can never log anyone in.
    pub fn new(
        owner_password: Option<String>,
        guest_password: Option<String>,
        owner_name: impl Into<String>,
        guest_name: impl Into<String>,
    ) -> Self {
        Self {
            owner_password: owner_password.filter(|p| !p.is_empty()),
            guest_password: guest_password.filter(|p| !p.is_empty()),
            owner_name: owner_name.into(),
            guest_name: guest_name.into(),
        }
    }

    /// Whether at least one password is configured.
    pub fn any_configured(&self) -> bool {
        self.owner_password.is_some() || self.guest_password.is_some()
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Check a submitted password.
    ///
    /// The owner secret is checked first, so if both secrets are the same the
    /// caller is the owner. Returns `None` for anything that is not an exact
    /// match, including case or whitespace differences.
    pub fn authenticate(&self, candidate: &str) -> Option<Principal> {
        if self.owner_password.as_deref() == Some(candidate) {
            return Some(Principal {
                role: Role::Owner,
                display_name: self.owner_name.clone(),
            });
        }
        if self.guest_password.as_deref() == Some(candidate) {
            return Some(Principal {
                role: Role::Guest,
                display_name: self.guest_name.clone(),
            });
        }
        None
    }
}

impl fmt::Debug for SharedSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |p: &Option<String>| if p.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("SharedSecrets")
            .field("owner_password", &redact(&self.owner_password))
            .field("guest_password", &redact(&self.guest_password))
            .field("owner_name", &self.owner_name)
            .field("guest_name", &self.guest_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> SharedSecrets {
        SharedSecrets::new(
            Some("owner-pass".to_string()),
            Some("guest-pass".to_string()),
            "Sam",
            "Robin",
        )
    }

    #[test]
    fn test_owner_secret_yields_owner() {
        let principal = secrets().authenticate("owner-pass").unwrap();
        assert_eq!(principal.role, Role::Owner);
        assert_eq!(principal.display_name, "Sam");
    }

    #[test]
    fn test_guest_secret_yields_guest() {
        let principal = secrets().authenticate("guest-pass").unwrap();
        assert_eq!(principal.role, Role::Guest);
        assert_eq!(principal.display_name, "Robin");
    }

    #[test]
    fn test_near_misses_fail() {
        let secrets = secrets();
        let near_misses = [
            "",
            "OWNER-PASS",
            "Owner-pass",
            " owner-pass",
            "owner-pass ",
            "guest",
            "x",
        ];
        for candidate in near_misses {
            assert!(
                secrets.authenticate(candidate).is_none(),
                "{:?} should not authenticate",
                candidate
            );
        }
    }

    #[test]
    fn test_unset_and_empty_secrets_never_match() {
        let secrets = SharedSecrets::new(None, Some(String::new()), "Sam", "Robin");
        assert!(!secrets.any_configured());
        assert!(secrets.authenticate("").is_none());
        assert!(secrets.authenticate("anything").is_none());
    }

    #[test]
    fn test_identical_secrets_prefer_owner() {
        let secrets = SharedSecrets::new(
            Some("same".to_string()),
            Some("same".to_string()),
            "Sam",
            "Robin",
        );
        assert_eq!(secrets.authenticate("same").unwrap().role, Role::Owner);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let rendered = format!("{:?}", secrets());
        assert!(!rendered.contains("owner-pass"));
        assert!(!rendered.contains("guest-pass"));
        assert!(rendered.contains("<set>"));
    }
}
