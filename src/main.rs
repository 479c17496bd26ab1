//! Subcast - channel subscriptions and video notifications from the command line.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use subcast::cli::{Cli, InputSource};
use subcast::commands::ConsoleOutput;
use subcast::config::Config;
use subcast::error::{Result, SubcastError};
use subcast::logging;
use subcast::registry::Registry;
use subcast::repl::{BufReadSource, LineSource, Repl};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();

    let config = match init(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e, true),
    };

    if let Err(e) = run(&cli, &config) {
        // Script runs log to stderr already; interactive runs log to a file.
        fail(&e, !cli.is_script());
    }
}

fn fail(e: &SubcastError, echo_to_stderr: bool) -> ! {
    error!("{}: {}", e.category(), e);
    if echo_to_stderr {
        eprintln!("{}: {}", e.category(), e);
    }
    std::process::exit(1);
}

/// Loads the config and starts logging.
fn init(cli: &Cli) -> Result<Config> {
    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;

    if cli.is_script() {
        logging::init_stderr_logging(&config.logging.level)?;
    } else {
        logging::init_file_logging(&config.logging.level)?;
    }
    info!("Loaded config from: {}", config_path.display());
    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let source = cli.input_source();
    let mut input: Box<dyn LineSource> = match &source {
        InputSource::Interactive | InputSource::Stdin => {
            Box::new(BufReadSource::new(io::stdin().lock()))
        }
        InputSource::File(path) => {
            let file = File::open(path).map_err(|e| {
                SubcastError::input(format!("Failed to open script {}: {e}", path.display()))
            })?;
            Box::new(BufReadSource::new(BufReader::new(file)))
        }
    };

    // The registry lives for the whole process and is shared with every command.
    let mut registry = Registry::new();
    let mut repl = Repl::new(&mut registry);

    let interactive = source == InputSource::Interactive && io::stdin().is_terminal();
    if let Some(prompt) = config.prompt().filter(|_| interactive && !cli.no_prompt) {
        repl = repl.with_prompt(prompt);
    }

    let mut out = ConsoleOutput::new();
    repl.run(input.as_mut(), &mut out)?;
    Ok(())
}
