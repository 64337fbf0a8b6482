//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts; it is immutable for the process lifetime.
//!
//! ## Required Variables
//!
//! - `NOTION_API_KEY` - integration token for the content store
//! - `NOTION_DATABASE_ID` - database holding the review pages
//!
//! ## Optional Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - per-request timeout for store calls (default: 10)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_api_key: String,
    pub notion_database_id: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout applied to every round trip to the content store. The store
    /// client itself never retries; a timed-out request surfaces as a fetch
    /// failure.
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the content store credentials are missing.
    pub fn from_env() -> Result<Self> {
        let notion_api_key = env::var("NOTION_API_KEY").context("NOTION_API_KEY must be set")?;
        let notion_database_id =
            env::var("NOTION_DATABASE_ID").context("NOTION_DATABASE_ID must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            notion_api_key,
            notion_database_id,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a valid socket address
    /// - `http_timeout_seconds` is zero or over 300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("LISTEN is not a valid socket address: {}", self.listen_addr))?;

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            notion_api_key: "secret".to_string(),
            notion_database_id: "db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            http_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_format() {
        let mut config = base_config();
        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_listen_addr() {
        let mut config = base_config();
        config.listen_addr = "not-an-addr".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = base_config();
        config.http_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
