//! Load [`AppConfig`] from environment variables.

use crate::config::types::{AppConfig, DatabaseConfig, HttpConfig};
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to [`AppConfig::default`].
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let db = defaults.database;
        let http = defaults.http;

        let database = DatabaseConfig {
            url: get("DATABASE_URL").filter(|s| !s.trim().is_empty()),
            host: get("DB_HOST").unwrap_or(db.host),
            port: parse_or(&get, "DB_PORT", db.port)?,
            user: get("DB_USER").unwrap_or(db.user),
            password: get("DB_PASSWORD").unwrap_or(db.password),
            name: get("DB_NAME").unwrap_or(db.name),
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", db.max_connections)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        let cors_origins = match get("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => http.cors_origins,
        };

        Ok(AppConfig {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database,
            http: HttpConfig {
                cors_origins,
                max_body_size: parse_or(&get, "MAX_BODY_SIZE", http.max_body_size)?,
            },
        })
    }
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}
