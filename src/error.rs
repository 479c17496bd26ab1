//! Error types for Subcast.
//!
//! Defines the main error enum used outside the command core. Bad command
//! lines never produce one of these; they are ignored or reported as a failed
//! execution instead.

use thiserror::Error;

/// Main error type for Subcast operations.
#[derive(Error, Debug)]
pub enum SubcastError {
    /// Configuration errors (unreadable config file, invalid TOML, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input errors (unreadable script file, broken stdin, etc.)
    #[error("Input error: {0}")]
    Input(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubcastError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an input error with the given message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Input(_) => "Input Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using SubcastError.
pub type Result<T> = std::result::Result<T, SubcastError>;
