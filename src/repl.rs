//! The read-evaluate loop.
//!
//! Reads one line at a time, routes it to a command and executes it. An empty
//! line or end of input ends the session. Lines that match no command are
//! dropped without output.

use std::io::BufRead;

use tracing::{debug, info, warn};

use crate::commands::{Command, CommandRouter, OutputSink};
use crate::error::{Result, SubcastError};
use crate::registry::Registry;

/// Source of raw command lines.
pub trait LineSource {
    /// Reads the next line without its terminator. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Line source over any buffered reader (stdin, a script file, a byte slice).
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the session; only real I/O errors are returned.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| SubcastError::input(format!("Failed to read line: {e}")))?;
        if read == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Input line is not valid UTF-8: {}", e.utf8_error());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Some(line))
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Non-empty lines read.
    pub lines_read: usize,
    /// Commands that executed successfully.
    pub executed: usize,
    /// Commands that were recognised but failed.
    pub failed: usize,
    /// Lines that matched no command.
    pub ignored: usize,
}

/// Interactive session over a registry.
pub struct Repl<'a> {
    registry: &'a mut Registry,
    prompt: Option<String>,
}

impl<'a> Repl<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            prompt: None,
        }
    }

    /// Shows `prompt` before every read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Runs until an empty line or end of input.
    pub fn run(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut dyn OutputSink,
    ) -> Result<SessionStats> {
        let mut stats = SessionStats::default();
        info!("Session started");

        loop {
            if let Some(prompt) = &self.prompt {
                out.prompt(prompt);
            }

            let line = match input.read_line()? {
                Some(line) if !line.is_empty() => line,
                _ => break,
            };
            stats.lines_read += 1;

            match CommandRouter::evaluate(&line, self.registry) {
                Some(mut command) => {
                    if command.execute(&line, out) {
                        stats.executed += 1;
                    } else {
                        stats.failed += 1;
                    }
                }
                None => {
                    debug!(line = %line, "Ignoring unrecognised line");
                    stats.ignored += 1;
                }
            }
        }

        info!(
            lines = stats.lines_read,
            executed = stats.executed,
            failed = stats.failed,
            ignored = stats.ignored,
            channels = self.registry.len(),
            "Session ended"
        );
        Ok(stats)
    }
}
