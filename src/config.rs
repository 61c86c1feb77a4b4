//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! The configuration is loaded once in `main` and handed to [`crate::AppState`].

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_LOG_FILTER,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MAX_RECIPIENT_LENGTH,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub notifications: NotificationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Notification configuration
#[derive(Debug, Clone, Default)]
pub struct NotificationConfig {
    /// Recipient stamped on conflict alerts; `None` leaves them unaddressed
    pub default_recipient: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            notifications: NotificationConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_or_default("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            log_json: env::var("LOG_FORMAT")
                .map(|format| format.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let acquire_timeout_secs = parse_or_default(
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_or_default(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

impl NotificationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_recipient = match env::var("NOTIFICATION_DEFAULT_RECIPIENT") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) if value.len() > MAX_RECIPIENT_LENGTH => {
                return Err(ConfigError::InvalidValue(
                    "NOTIFICATION_DEFAULT_RECIPIENT".to_string(),
                ));
            }
            Ok(value) => Some(value.trim().to_string()),
            Err(_) => None,
        };

        Ok(Self { default_recipient })
    }
}

fn parse_or_default<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
