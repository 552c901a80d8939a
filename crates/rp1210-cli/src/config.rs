//! Lookup tool configuration
//!
//! Layered from built-in defaults, an optional `rp1210.toml` in the working
//! directory, and `RP1210_*` environment variables (e.g. `RP1210_FORMAT=json`).

use serde::{Deserialize, Serialize};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result
    Text,
    /// One JSON object per line
    Json,
}

/// Lookup tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Output format for results
    pub format: OutputFormat,

    /// Max tracing level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON instead of plain text
    pub json_logs: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl LookupConfig {
    /// Load from `rp1210.toml` (optional) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("rp1210")
    }

    /// Load using `file_stem` as the optional config file name
    pub fn load_from(file_stem: &str) -> Result<Self, config::ConfigError> {
        Self::load_layered(file_stem, config::Environment::with_prefix("RP1210"))
    }

    /// Defaults, then the optional file, then `env` on top
    pub fn load_layered(
        file_stem: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("format", "text")?
            .set_default("log_level", defaults.log_level)?
            .set_default("json_logs", defaults.json_logs)?
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Parsed tracing level, falling back to WARN on garbage
    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}
