//! Configuration management for the fraud monitor

use crate::analyzer::client::DEFAULT_ENDPOINT;
use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub analyzer: AnalyzerConfig,
    pub logging: LoggingConfig,
}

/// Threat analyzer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Text-generation endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API credential. Supplied via the environment
    /// (`FRAUDWATCH_ANALYZER__API_KEY`); absence is a recoverable
    /// configuration error at analysis time, not a startup crash.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    15_000
}

impl AppConfig {
    /// Load configuration from the default file with environment overlay.
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path. Environment variables
    /// prefixed `FRAUDWATCH_` override file values (`__` separates levels).
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix("FRAUDWATCH").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig {
                endpoint: default_endpoint(),
                api_key: None,
                timeout_ms: default_timeout_ms(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
