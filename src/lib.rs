//! Subcast - channel subscriptions and video notifications from the command line.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod repl;
