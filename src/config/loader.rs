//! Load `AppConfig` from environment variables (or any key lookup).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `LISTEN_ADDR`, `DB_MAX_CONNECTIONS`,
    /// `DB_ACQUIRE_TIMEOUT_SECS`, `BOOKS_TABLE` and `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = AppConfig {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            listen_addr: parse_or(&lookup, "LISTEN_ADDR", default_listen_addr())?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
            books_table: lookup("BOOKS_TABLE").unwrap_or_else(|| DEFAULT_BOOKS_TABLE.into()),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        };
        validate(&config)?;
        Ok(config)
    }
}
