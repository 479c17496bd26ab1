//! Output sinks for command and notification lines.
//!
//! Commands and observers only ever emit whole lines. Where those lines end up
//! (the terminal, a buffer under test) is decided by the sink the caller
//! passes in.

use std::io::{self, Write};

use tracing::warn;

/// Destination for lines produced by commands and observers.
pub trait OutputSink {
    /// Emits one line of output. The sink supplies the line terminator.
    fn emit(&mut self, line: &str);

    /// Shows an input prompt. Sinks that have no use for prompts ignore it.
    fn prompt(&mut self, _text: &str) {}
}

/// Writes lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleOutput {
    fn emit(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            warn!("Failed to write to stdout: {e}");
        }
    }

    fn prompt(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "{text}").and_then(|()| stdout.flush()) {
            warn!("Failed to write prompt: {e}");
        }
    }
}

/// Collects emitted lines in memory. Prompts are counted but not stored.
#[derive(Debug, Default, Clone)]
pub struct BufferedOutput {
    lines: Vec<String>,
    prompts: usize,
}

impl BufferedOutput {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of prompts shown so far.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for BufferedOutput {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn prompt(&mut self, _text: &str) {
        self.prompts += 1;
    }
}
