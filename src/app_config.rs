use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Prefix prepended to each output filename
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Line layout config
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Boundary repair config
    #[serde(default)]
    pub repair: RepairConfig,

    /// Optional path to a JSON file of ordered find/replace rules
    #[serde(default)]
    pub rules_file: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Line layout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LayoutConfig {
    /// Display-width budget per line, in codepoints
    #[serde(default = "default_max_line")]
    pub max_line: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_line: default_max_line(),
        }
    }
}

/// Boundary repair configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RepairConfig {
    /// Inter-cue gap in milliseconds at or above which no migration happens
    #[serde(default = "default_max_gap_ms")]
    pub max_gap_ms: u64,

    /// Characters never migrated across a cue boundary
    #[serde(default = "default_excluded_chars")]
    pub excluded_chars: String,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            max_gap_ms: default_max_gap_ms(),
            excluded_chars: default_excluded_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_output_prefix() -> String {
    "output_".to_string()
}

fn default_max_line() -> usize {
    crate::line_layout::DEFAULT_MAX_LINE
}

fn default_max_gap_ms() -> u64 {
    crate::boundary_repair::DEFAULT_MAX_GAP_MS
}

fn default_excluded_chars() -> String {
    crate::boundary_repair::DEFAULT_EXCLUDED_CHARS.to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // A budget below 8 leaves the layout passes no usable scan range
        if self.layout.max_line < 8 {
            return Err(anyhow!(
                "layout.max_line must be at least 8, got {}",
                self.layout.max_line
            ));
        }

        if self.repair.max_gap_ms == 0 {
            return Err(anyhow!("repair.max_gap_ms must be greater than 0"));
        }

        if let Some(rules_file) = &self.rules_file {
            if !rules_file.exists() {
                return Err(anyhow!("Rules file does not exist: {}", rules_file.display()));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_prefix: default_output_prefix(),
            layout: LayoutConfig::default(),
            repair: RepairConfig::default(),
            rules_file: None,
            log_level: LogLevel::default(),
        }
    }
}
