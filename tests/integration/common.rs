//! Common test utilities for integration tests.

use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use subcast::commands::BufferedOutput;
use subcast::registry::Registry;
use subcast::repl::{BufReadSource, Repl, SessionStats};

/// Runs a script through the library loop and returns the emitted lines.
pub fn run_session(script: &str) -> (Vec<String>, SessionStats, Registry) {
    let mut registry = Registry::new();
    let mut input = BufReadSource::new(Cursor::new(script.to_string()));
    let mut out = BufferedOutput::default();
    let stats = Repl::new(&mut registry)
        .run(&mut input, &mut out)
        .expect("session failed");
    (out.into_lines(), stats, registry)
}

/// Runs the subcast binary with the given arguments, feeding `stdin`.
/// `config_dir` isolates the run from any user config file.
pub fn run_binary(
    args: &[&str],
    stdin: impl AsRef<[u8]>,
    config_dir: &Path,
) -> (i32, String, String) {
    let config = config_dir.join("config.toml");
    let mut child = Command::new(env!("CARGO_BIN_EXE_subcast"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // The child may exit before reading all input (e.g. on a config error),
    // so a broken pipe here is not a harness failure.
    if let Err(e) = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_ref())
    {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            panic!("Failed to write stdin: {e:?}");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for command");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
