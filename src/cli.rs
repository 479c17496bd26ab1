//! Command-line argument parsing for Subcast.

use clap::Parser;
use std::path::PathBuf;

/// Subscribe users to channels and notify them when a video is published.
#[derive(Parser, Debug)]
#[command(name = "subcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "SUBCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read commands from a file instead of the terminal (use "-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Do not print a prompt before each command
    #[arg(long)]
    pub no_prompt: bool,
}

/// Where command lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, typed by a user.
    Interactive,
    /// Standard input, piped in via `--script -`.
    Stdin,
    /// A script file.
    File(PathBuf),
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns true if commands come from --script.
    pub fn is_script(&self) -> bool {
        self.script.is_some()
    }

    /// Resolves the input source from the --script argument.
    pub fn input_source(&self) -> InputSource {
        match self.script.as_deref() {
            None => InputSource::Interactive,
            Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        }
    }
}
