//! Tests that run the compiled binary in script mode.

use std::fs;

use pretty_assertions::assert_eq;

use super::common::run_binary;

#[test]
fn test_script_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_binary(
        &["--script", "-"],
        "subscribe <alice> to <cd>\npublish video on <cd>\n\n",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "alice subscribed to cd\nNotifying subscribers of cd:\n\talice\n"
    );
}

#[test]
fn test_script_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("session.txt");
    fs::write(
        &script,
        "subscribe <bob> to <news>\nsubscribe <carol> to <news>\npublish video on <news>\n",
    )
    .unwrap();

    let (code, stdout, _) = run_binary(&["--script", script.to_str().unwrap()], "", dir.path());

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "bob subscribed to news\ncarol subscribed to news\nNotifying subscribers of news:\n\tbob\n\tcarol\n"
    );
}

#[test]
fn test_unknown_channel_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_binary(
        &["--script", "-"],
        "publish video on <unknown>\n\n",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn test_missing_script_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let (code, stdout, stderr) =
        run_binary(&["--script", missing.to_str().unwrap()], "", dir.path());

    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Input Error"));
    assert_eq!(stderr.matches("Failed to open script").count(), 1);
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[repl\n").unwrap();

    let (code, _, stderr) = run_binary(&["--script", "-"], "\n", dir.path());

    assert_eq!(code, 1);
    assert!(stderr.contains("Configuration Error"));
}

#[test]
fn test_script_mode_never_prompts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[repl]\nprompt = \"PROMPT> \"\n",
    )
    .unwrap();

    let (code, stdout, _) = run_binary(&["--script", "-"], "subscribe <a> to <b>\n", dir.path());

    assert_eq!(code, 0);
    assert_eq!(stdout, "a subscribed to b\n");
}

#[test]
fn test_undecodable_line_does_not_end_session() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_binary(
        &["--script", "-"],
        b"subscribe <alice> to <cd>\n\xff\npublish video on <cd>\n\n",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "alice subscribed to cd\nNotifying subscribers of cd:\n\talice\n"
    );
}
