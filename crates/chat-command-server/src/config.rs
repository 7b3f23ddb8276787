//! Configuration for the command server.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Recharge plans API configuration
    pub plans: PlansConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Redirect target for `GET /`
    #[serde(default = "default_homepage_url")]
    pub homepage_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// API key sent with every lookup
    pub api_key: SecretString,

    /// Lookup endpoint
    #[serde(default = "default_plans_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            homepage_url: default_homepage_url(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_homepage_url() -> String {
    "https://github.com/vishaltelangre/cowboy".into()
}

fn default_plans_url() -> String {
    "http://api.dataweave.in/v1/telecom_data/listByCircle/".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nested keys use `__` (`PLANS__API_KEY`). A bare `PORT`, as set by most
    /// hosting platforms, overrides `SERVER__PORT`.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())
            .context("Failed to apply PORT override")?;

        Self::from_builder(builder)
    }

    /// Build configuration from an assembled set of sources.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_builder(
            builder().set_override("plans.api_key", "secret").unwrap(),
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(
            config.plans.base_url,
            "http://api.dataweave.in/v1/telecom_data/listByCircle/"
        );
        assert_eq!(config.plans.timeout, Duration::from_secs(10));
        assert_eq!(config.plans.api_key.expose_secret(), "secret");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_builder(
            builder()
                .set_override("plans.api_key", "secret")
                .unwrap()
                .set_override("plans.timeout", "2s 500ms")
                .unwrap()
                .set_override("server.port", "8080")
                .unwrap()
                .set_override("log.format", "json")
                .unwrap(),
        )
        .unwrap();

        assert_eq!(config.plans.timeout, Duration::from_millis(2500));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_api_key_required() {
        assert!(Config::from_builder(builder()).is_err());
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let config = Config::from_builder(
            builder().set_override("plans.api_key", "hunter2").unwrap(),
        )
        .unwrap();

        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
