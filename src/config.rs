//! Configuration management for Subcast.
//!
//! Handles loading configuration from a TOML file. Every key is optional and
//! a missing file means defaults.

use crate::error::{Result, SubcastError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Subcast.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Interactive loop settings.
    #[serde(default)]
    pub repl: ReplConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interactive loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text printed before each read in interactive mode.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the prompt at all.
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,
}

fn default_prompt() -> String {
    ">>> ".to_string()
}

fn default_show_prompt() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_prompt: default_show_prompt(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info", "subcast=debug").
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("subcast")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SubcastError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SubcastError::config(format!("Failed to parse {}:\n  {}", path.display(), e))
        })
    }

    /// Returns the prompt to show, or `None` if prompting is disabled.
    pub fn prompt(&self) -> Option<&str> {
        if self.repl.show_prompt && !self.repl.prompt.is_empty() {
            Some(&self.repl.prompt)
        } else {
            None
        }
    }
}
