//! # CLI Configuration
//!
//! Optional `elpx.yaml` passed with `--config`. Every field has a default,
//! so an empty file is valid. Command-line flags override file values.
//!
//! ```yaml
//! log_format: json          # text | json
//! output_format: text       # text | json
//! server_conversion: false  # legacy packages cannot be routed
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// How command results are written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per package.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

/// Settings loaded from `elpx.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log line format.
    pub log_format: LogFormat,
    /// Default output format for `detect`.
    pub output_format: OutputFormat,
    /// Whether the legacy conversion endpoint is available.
    pub server_conversion: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            output_format: OutputFormat::Text,
            server_conversion: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Parse from YAML text. Empty text yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
