//! Database connection configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Connection settings shared by all modules
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbConfig {
    /// Connection string, e.g. `sqlite://catalog.db?mode=rwc` or `postgres://...`
    #[serde(default = "default_dsn")]
    pub dsn: String,

    /// Upper bound of pooled connections
    #[serde(default)]
    pub max_connections: Option<u32>,

    /// Lower bound of pooled connections
    #[serde(default)]
    pub min_connections: Option<u32>,

    /// Time allowed to open a new connection
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Emit every statement through sqlx's logger
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("dsn", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("sqlx_logging", &self.sqlx_logging)
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            max_connections: None,
            min_connections: None,
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
        }
    }
}

impl DbConfig {
    /// Config for a private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            dsn: "sqlite::memory:".to_string(),
            // the database lives only as long as its single connection
            max_connections: Some(1),
            min_connections: Some(1),
            ..Self::default()
        }
    }

    /// Backend name derived from the DSN scheme, for logging
    pub fn backend(&self) -> &str {
        self.dsn.split(':').next().unwrap_or("unknown")
    }
}

fn default_dsn() -> String {
    "sqlite://catalog.db?mode=rwc".to_string()
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}
