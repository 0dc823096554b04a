//! Store configuration and admin credential checks.
//!
//! Connection settings come from the process environment. Placeholder values
//! copied straight out of an example env file (`your_..._here`) are treated
//! as absent, not merely suspicious: it is better to fail fast at
//! construction than to open a database at a nonsense path.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use thiserror::Error;

/// Environment variable naming the SQLite database file.
pub const DB_PATH_ENV: &str = "MESO_MARKET_DB_PATH";
/// Environment variables for the admin credential pair.
pub const ADMIN_USER_ENV: &str = "MESO_MARKET_ADMIN_USER";
pub const ADMIN_PASSWORD_ENV: &str = "MESO_MARKET_ADMIN_PASSWORD";

/// Shortest admin password accepted from the environment.
const MIN_PASSWORD_LEN: usize = 8;

/// How long an admin session stays valid after login.
pub const SESSION_VALIDITY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{0} is set to a placeholder value; replace it with a real one")]
    Placeholder(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection configuration for the embedded store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Read and validate the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(DB_PATH_ENV).ok();
        Self::from_value(raw.as_deref())
    }

    /// Validate a raw path value. Split out of [`Self::from_env`] so it can
    /// be tested without touching the process environment.
    pub fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(ConfigError::Missing(DB_PATH_ENV));
        }
        if is_placeholder(value) {
            return Err(ConfigError::Placeholder(DB_PATH_ENV));
        }
        Ok(Self::new(value))
    }
}

/// Admin credential pair for the back-office login check.
///
/// The check is a plain comparison returning a boolean; session state is a
/// client-stored login timestamp tested against [`SESSION_VALIDITY`].
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from the environment, falling back to the built-in
    /// defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = std::env::var(ADMIN_USER_ENV).ok();
        let password = std::env::var(ADMIN_PASSWORD_ENV).ok();
        Self::from_values(username.as_deref(), password.as_deref())
    }

    /// Validate raw credential values; see [`StoreConfig::from_value`].
    pub fn from_values(
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let username = match username.map(str::trim) {
            Some(u) if !u.is_empty() => u,
            _ => "admin",
        };
        let password = match password.map(str::trim) {
            Some(p) if !p.is_empty() => p,
            _ => "Aa11112222.",
        };
        if is_placeholder(password) {
            return Err(ConfigError::Placeholder(ADMIN_PASSWORD_ENV));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ConfigError::Invalid {
                var: ADMIN_PASSWORD_ENV,
                reason: format!("shorter than {MIN_PASSWORD_LEN} characters"),
            });
        }
        Ok(Self::new(username, password))
    }

    /// Compare a submitted credential pair. Returns a boolean success flag;
    /// there is no token or session object.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Whether a login recorded at `logged_in_at` is still inside the
/// fixed validity window at `now`.
pub fn session_valid(logged_in_at: SystemTime, now: SystemTime) -> bool {
    match now.duration_since(logged_in_at) {
        Ok(elapsed) => elapsed <= SESSION_VALIDITY,
        // Clock went backwards; treat the session as fresh.
        Err(_) => true,
    }
}

/// Placeholder values look like `your_database_path_here`.
fn is_placeholder(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v.starts_with("your_") && v.ends_with("_here")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_paths_are_rejected() {
        assert!(matches!(
            StoreConfig::from_value(None),
            Err(ConfigError::Missing(_))
        ));
        assert!(matches!(
            StoreConfig::from_value(Some("  ")),
            Err(ConfigError::Missing(_))
        ));
    }

    #[test]
    fn placeholder_path_is_rejected() {
        assert!(matches!(
            StoreConfig::from_value(Some("your_database_path_here")),
            Err(ConfigError::Placeholder(_))
        ));
        assert!(matches!(
            StoreConfig::from_value(Some("YOUR_DATABASE_PATH_HERE")),
            Err(ConfigError::Placeholder(_))
        ));
    }

    #[test]
    fn real_path_is_accepted() {
        let config = StoreConfig::from_value(Some("/var/lib/meso-market/store.db")).unwrap();
        assert_eq!(
            config.db_path,
            PathBuf::from("/var/lib/meso-market/store.db")
        );
    }

    #[test]
    fn credentials_default_when_unset() {
        let creds = AdminCredentials::from_values(None, None).unwrap();
        assert!(creds.verify("admin", "Aa11112222."));
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "Aa11112222."));
    }

    #[test]
    fn short_or_placeholder_passwords_are_rejected() {
        assert!(matches!(
            AdminCredentials::from_values(Some("admin"), Some("abc")),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            AdminCredentials::from_values(Some("admin"), Some("your_admin_password_here")),
            Err(ConfigError::Placeholder(_))
        ));
    }

    #[test]
    fn session_window_is_24_hours() {
        let login = SystemTime::UNIX_EPOCH;
        assert!(session_valid(login, login + Duration::from_secs(60)));
        assert!(session_valid(login, login + SESSION_VALIDITY));
        assert!(!session_valid(
            login,
            login + SESSION_VALIDITY + Duration::from_secs(1)
        ));
    }
}
