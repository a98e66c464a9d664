//! Configuration structures.
//!
//! Configuration is loaded from environment variables and optional JSON files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::{Error, Result};

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "MINERVA_LOG";

/// Environment variable selecting `json` or text log output.
pub const ENV_LOG_FORMAT: &str = "MINERVA_LOG_FORMAT";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Inspection output configuration.
    #[serde(default)]
    pub inspect: InspectConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Inspection output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InspectConfig {
    /// Pretty-print the summary.
    pub pretty: bool,

    /// Embed the raw payload in the summary.
    pub include_raw: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_raw: false,
        }
    }
}

impl Config {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (environment-shaped).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(lookup)?;
        Ok(config)
    }

    /// Load configuration from a JSON file. Missing sections take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let config: Config = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment-shaped values onto this configuration.
    pub fn apply_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level.trim().to_ascii_lowercase();
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.observability.json_logs = format.trim().eq_ignore_ascii_case("json");
        }
        self.validate()
    }

    /// Reject values the tracing layer cannot use.
    pub fn validate(&self) -> Result<()> {
        self.observability
            .log_level
            .parse::<tracing::Level>()
            .map_err(|_| {
                Error::config(format!(
                    "unknown log level '{}'",
                    self.observability.log_level
                ))
            })?;
        Ok(())
    }
}
