//! Config validation.

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::sql::qualified_table;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    qualified_table(&config.books_table)?;
    if config.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: "0".into(),
        });
    }
    Ok(())
}
