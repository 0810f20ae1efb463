//! Configuration management for the compliance dashboard.
//!
//! Configuration is read from environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `DEV_MODE` - Optional. When `true`, protected routes skip the login gate. Defaults to `false`.
//!
//! Log verbosity follows `RUST_LOG` (see `main.rs`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Skip the authentication gate on protected routes
    pub dev_mode: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` or `DEV_MODE` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let dev_mode = match std::env::var("DEV_MODE") {
            Ok(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue("DEV_MODE".to_string(), value))?,
            Err(_) => false,
        };

        Ok(Self {
            host,
            port,
            dev_mode,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            dev_mode: false,
        }
    }

    /// `host:port` the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
