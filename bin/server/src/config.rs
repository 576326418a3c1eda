//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables, e.g.
//! `BACKEND__BASE_URL=https://api.example.com`.

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Marketplace backend connection settings.
    pub backend: BackendConfig,

    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Marketplace backend connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Name of the backend function that settles provider earnings.
    #[serde(default = "default_earnings_function")]
    pub earnings_function: String,
}

/// Session cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Lifetime of the token cookie, in minutes.
    #[serde(default = "default_token_max_age_minutes")]
    pub token_max_age_minutes: i64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true; set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_earnings_function() -> String {
    "processProviderEarnings".to_string()
}

fn default_token_max_age_minutes() -> i64 {
    60 * 24 * 7
}

fn default_secure_cookies() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_max_age_minutes: default_token_max_age_minutes(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.token_max_age_minutes, 10_080);
        assert!(config.secure_cookies);
    }

    #[test]
    fn backend_config_fills_defaults() {
        let config: BackendConfig = config::Config::builder()
            .set_override("base_url", "https://api.example.com")
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.earnings_function, "processProviderEarnings");
    }
}
