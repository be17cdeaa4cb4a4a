//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Scanning configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Link checking configuration
    #[serde(default)]
    pub links: LinksConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as a TOML template
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.links.timeout_secs == 0 {
            return Err(CliError::ConfigError(
                "links.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !["text", "json", "markdown"].contains(&self.output.default_format.as_str()) {
            return Err(CliError::ConfigError(format!(
                "output.default_format must be one of text, json, markdown; got {:?}",
                self.output.default_format
            )));
        }
        Ok(())
    }
}

/// Scan-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Emit the last section's dates as a group instead of dropping them
    pub flush_trailing_dates: bool,

    /// Leave lines without tokens out of the report
    pub skip_untagged_lines: bool,

    /// Require the first verb of a line to be past tense
    pub strict_action_verbs: bool,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Link checking configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Probe links without passing --check-links
    pub enabled: bool,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with each probe
    pub user_agent: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_secs: 10,
            user_agent: concat!("resumelint/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
