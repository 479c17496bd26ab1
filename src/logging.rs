//! Logging configuration for Subcast.
//!
//! Stdout carries command output, so logs never go there. Interactive sessions
//! log to a file; script runs log to stderr.

use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SubcastError};

/// Builds the filter: `RUST_LOG` if set, otherwise `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initializes logging for interactive mode.
///
/// Logs are written to a file to keep the console free for command output.
/// Location: `~/.local/state/subcast/subcast.log` on Linux (XDG state directory),
/// or the platform-appropriate state/config directory on other systems.
pub fn init_file_logging(default_level: &str) -> Result<()> {
    let log_path = get_log_path();

    // Ensure parent directory exists
    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return Ok(());
        }
    }

    // Truncate on each run to avoid unbounded growth
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(log_file)
        .with_ansi(false)
        .try_init()
        .map_err(|e| SubcastError::internal(format!("Failed to initialize logging: {e}")))
}

/// Initializes logging for script mode.
///
/// Logs are written to stderr so they can be captured separately from output.
pub fn init_stderr_logging(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| SubcastError::internal(format!("Failed to initialize logging: {e}")))
}

/// Returns the path for the log file.
///
/// Uses XDG state directory on Linux (`~/.local/state/subcast/subcast.log`),
/// or falls back to config directory on other platforms.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("subcast").join("subcast.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("subcast").join("subcast.log");
    }

    // Last resort: temp directory
    std::env::temp_dir().join("subcast.log")
}
