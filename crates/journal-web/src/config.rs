//! Configuration loading.
//!
//! Settings are resolved once at startup, lowest precedence first:
//! built-in defaults, the TOML config file, environment variables, then
//! command-line flags. The result is an immutable `Settings` value shared
//! by every request.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use journal_core::SharedSecrets;

use crate::cli::Cli;
use crate::constants::{defaults, env, MAX_IDLE_TIMEOUT_MINUTES};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub server: ServerSection,
    pub storage: StorageSection,
    pub auth: AuthSection,
    pub session: SessionSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub path: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct AuthSection {
    pub secret_key: Option<String>,
    pub owner_password: Option<String>,
    pub guest_password: Option<String>,
    pub owner_name: Option<String>,
    pub guest_name: Option<String>,
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<set>"))
            .field("owner_password", &self.owner_password.as_ref().map(|_| "<set>"))
            .field("guest_password", &self.guest_password.as_ref().map(|_| "<set>"))
            .field("owner_name", &self.owner_name)
            .field("guest_name", &self.guest_name)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Expire sessions after this many idle minutes. Unset means the cookie
    /// lives until the browser closes.
    pub idle_timeout_minutes: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl JournalConfig {
    /// Overlay environment values. Unset and blank variables are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(value) = var(env::BIND) {
            self.server.bind = Some(value);
        }
        if let Some(value) = var(env::DATABASE) {
            self.storage.path = Some(value);
        }
        if let Some(value) = var(env::SECRET_KEY) {
            self.auth.secret_key = Some(value);
        }
        if let Some(value) = var(env::OWNER_PASSWORD) {
            self.auth.owner_password = Some(value);
        }
        if let Some(value) = var(env::GUEST_PASSWORD) {
            self.auth.guest_password = Some(value);
        }
        if let Some(value) = var(env::OWNER_NAME) {
            self.auth.owner_name = Some(value);
        }
        if let Some(value) = var(env::GUEST_NAME) {
            self.auth.guest_name = Some(value);
        }
        if let Some(value) = var(env::LOG_LEVEL) {
            self.logging.level = Some(value);
        }
    }
}

/// Fully resolved, immutable runtime settings.
pub struct Settings {
    pub bind: SocketAddr,
    pub database_path: PathBuf,
    pub secret_key: Option<String>,
    pub secrets: SharedSecrets,
    pub session_idle_timeout: Option<time::Duration>,
    pub log_level: String,
}

impl Settings {
    /// Load the config file, overlay the process environment and `cli`.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = load_config(cli.config.as_deref())?;
        config.apply_env(|name| std::env::var(name).ok());
        Self::resolve(config, cli)
    }

    /// Apply command-line overrides and defaults to a merged config.
    pub fn resolve(config: JournalConfig, cli: &Cli) -> anyhow::Result<Self> {
        let bind = match cli.bind {
            Some(addr) => addr,
            None => {
                let raw = config.server.bind.as_deref().unwrap_or(defaults::BIND);
                raw.parse()
                    .map_err(|e| anyhow::anyhow!("Invalid bind address {:?}: {}", raw, e))?
            }
        };

        let database_path = cli
            .database
            .clone()
            .or_else(|| config.storage.path.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(defaults::DATABASE));

        let log_level = cli
            .log_level
            .clone()
            .or(config.logging.level)
            .unwrap_or_else(|| defaults::LOG_LEVEL.to_string());

        let auth = config.auth;
        let secrets = SharedSecrets::new(
            auth.owner_password,
            auth.guest_password,
            auth.owner_name.unwrap_or_else(|| defaults::OWNER_NAME.to_string()),
            auth.guest_name.unwrap_or_else(|| defaults::GUEST_NAME.to_string()),
        );

        Ok(Self {
            bind,
            database_path,
            secret_key: auth.secret_key.filter(|k| !k.is_empty()),
            secrets,
            session_idle_timeout: idle_timeout(config.session.idle_timeout_minutes)?,
            log_level,
        })
    }
}

/// Convert the configured idle timeout, rejecting zero and anything past
/// `MAX_IDLE_TIMEOUT_MINUTES`.
fn idle_timeout(minutes: Option<u64>) -> anyhow::Result<Option<time::Duration>> {
    let Some(minutes) = minutes else {
        return Ok(None);
    };
    if minutes == 0 || minutes > MAX_IDLE_TIMEOUT_MINUTES {
        anyhow::bail!(
            "Invalid session idle timeout {} minutes: expected 1 to {}",
            minutes,
            MAX_IDLE_TIMEOUT_MINUTES
        );
    }
    Ok(Some(time::Duration::minutes(i64::try_from(minutes)?)))
}

/// Read the config file named on the command line, or the default one.
///
/// An explicitly named file must exist; a missing default file yields the
/// built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<JournalConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = default_config_path()?;
    if path.exists() {
        read_config(&path)
    } else {
        Ok(JournalConfig::default())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<JournalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("journal"));
        }
    }
    Ok(home_dir()?.join(".config").join("journal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["journal"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn parse(toml_text: &str) -> JournalConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::resolve(JournalConfig::default(), &cli(&[])).unwrap();
        assert_eq!(settings.bind, defaults::BIND.parse().unwrap());
        assert_eq!(settings.database_path, PathBuf::from(defaults::DATABASE));
        assert_eq!(settings.log_level, "info");
        assert!(settings.secret_key.is_none());
        assert!(!settings.secrets.any_configured());
        assert_eq!(settings.secrets.owner_name(), "Owner");
        assert_eq!(settings.secrets.guest_name(), "Guest");
        assert!(settings.session_idle_timeout.is_none());
    }

    #[test]
    fn test_partial_file_parses() {
        let config = parse(
            r#"
            [storage]
            path = "/var/lib/journal/journal.db"

            [auth]
            owner_password = "hunter2"
            owner_name = "Sam"

            [session]
            idle_timeout_minutes = 30
            "#,
        );
        let settings = Settings::resolve(config, &cli(&[])).unwrap();
        assert_eq!(
            settings.database_path,
            PathBuf::from("/var/lib/journal/journal.db")
        );
        assert_eq!(settings.session_idle_timeout, Some(time::Duration::minutes(30)));
        let principal = settings.secrets.authenticate("hunter2").unwrap();
        assert_eq!(principal.display_name, "Sam");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = parse(
            r#"
            [auth]
            owner_password = "from-file"
            guest_password = "guest-file"
            "#,
        );
        let vars: HashMap<&str, &str> = HashMap::from([
            ("APP_PASSWORD", "from-env"),
            ("GF_PASSWORD", "   "),
            ("SECRET_KEY", "signing"),
            ("JOURNAL_DB", "env.db"),
        ]);
        config.apply_env(|name| vars.get(name).map(|v| v.to_string()));

        let settings = Settings::resolve(config, &cli(&[])).unwrap();
        assert!(settings.secrets.authenticate("from-env").is_some());
        assert!(settings.secrets.authenticate("from-file").is_none());
        assert!(settings.secrets.authenticate("guest-file").is_some());
        assert_eq!(settings.secret_key.as_deref(), Some("signing"));
        assert_eq!(settings.database_path, PathBuf::from("env.db"));
    }

    #[test]
    fn test_cli_overrides_everything() {
        let mut config = parse("[server]\nbind = \"127.0.0.1:1\"\n[storage]\npath = \"file.db\"\n");
        config.apply_env(|name| (name == "JOURNAL_DB").then(|| "env.db".to_string()));

        let settings = Settings::resolve(
            config,
            &cli(&["--database", "cli.db", "--bind", "0.0.0.0:9000", "--log-level", "debug"]),
        )
        .unwrap();
        assert_eq!(settings.database_path, PathBuf::from("cli.db"));
        assert_eq!(settings.bind, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_bad_bind_in_file_is_error() {
        let config = parse("[server]\nbind = \"not-an-address\"\n");
        assert!(Settings::resolve(config, &cli(&[])).is_err());
    }

    #[test]
    fn test_out_of_range_idle_timeout_is_error() {
        for minutes in [0, MAX_IDLE_TIMEOUT_MINUTES + 1, u64::MAX] {
            let mut config = JournalConfig::default();
            config.session.idle_timeout_minutes = Some(minutes);
            assert!(
                Settings::resolve(config, &cli(&[])).is_err(),
                "{} minutes should be rejected",
                minutes
            );
        }
    }

    #[test]
    fn test_longest_idle_timeout_is_accepted() {
        let mut config = JournalConfig::default();
        config.session.idle_timeout_minutes = Some(MAX_IDLE_TIMEOUT_MINUTES);
        let settings = Settings::resolve(config, &cli(&[])).unwrap();
        assert_eq!(settings.session_idle_timeout, Some(time::Duration::days(365)));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_read_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_auth_debug_redacts() {
        let config = parse("[auth]\nowner_password = \"topsecret\"\n");
        assert!(!format!("{:?}", config).contains("topsecret"));
    }
}
