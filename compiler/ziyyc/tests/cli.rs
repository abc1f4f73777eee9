#![allow(clippy::unwrap_used)]
//! Runs the `ziyy` binary end to end.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn ziyy(args: &[&str]) -> Output {
    match Command::new(env!("CARGO_BIN_EXE_ziyy"))
        .args(args)
        .env_remove("ZIYY_LOG")
        .output()
    {
        Ok(output) => output,
        Err(err) => panic!("failed to run ziyy: {err}"),
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn compiles_text_argument() {
    let output = ziyy(&["<b>hi</b>"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\x1b[0m\x1b[1mhi\x1b[22m\x1b[0m\n");
}

#[test]
fn no_newline_flag() {
    let output = ziyy(&["-n", "<c.red>x</c>"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\x1b[0m\x1b[31mx\x1b[0m\x1b[0m");
}

#[test]
fn reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("in.z");
    std::fs::write(&path, "<green>ok</green>").unwrap();

    let output = ziyy(&["-n", "-f", &path.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\x1b[0m\x1b[38;2;0;150;75mok\x1b[0m\x1b[0m");
}

#[test]
fn file_diagnostic_points_at_the_right_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.z");
    std::fs::write(&path, "<b>ok</b>\n<nope>\n").unwrap();

    let output = ziyy(&["--color", "never", "-f", &path.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error[E1007]: unknown variable `nope`"), "{err}");
    assert!(err.contains(" 2 | <nope>"), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let output = ziyy(&["-f", "/nonexistent/ziyy/input.z"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cannot read"));
}

#[test]
fn markup_error_prints_diagnostic() {
    let output = ziyy(&["--color", "never", "<c.red>text</x>"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error[E1002]: mismatched closing tag `x`"), "{err}");
    assert!(err.contains(" 1 | <c.red>text</x>"), "{err}");
    assert!(err.contains("help: close it with `</c.red>`"), "{err}");
    assert!(err.contains("   |  - `c.red` opened here"), "{err}");
    assert!(!err.contains('\x1b'), "{err}");
    // output written before the error is kept
    assert_eq!(stdout(&output), "\x1b[0m\x1b[31mtext");
}

#[test]
fn colored_diagnostics_on_request() {
    let output = ziyy(&["--color", "always", "<foo>"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn token_dump() {
    let output = ziyy(&["--tokens", "<b>x"]);
    assert_eq!(output.status.code(), Some(0));
    let dump = stdout(&output);
    assert!(dump.contains("OpenTag"), "{dump}");
    assert!(dump.contains("Bold"), "{dump}");
    assert!(dump.contains("\"x\""), "{dump}");
}

#[test]
fn explain_known_code() {
    let output = ziyy(&["--explain", "e1006"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("E1006: "));
}

#[test]
fn explain_unknown_code() {
    let output = ziyy(&["--explain", "E4242"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown error code"));
}

#[test]
fn no_input_prints_styled_usage() {
    let output = ziyy(&[]);
    assert_eq!(output.status.code(), Some(0));
    let usage = stdout(&output);
    assert!(usage.starts_with("\x1b[0m\x1b[1mziyy\x1b[22m"), "{usage:?}");
    assert!(usage.contains("--no-newline"));
}

#[test]
fn bad_arguments_exit_with_usage_error() {
    let output = ziyy(&["--color", "sometimes", "x"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn version() {
    let output = ziyy(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("ziyy "));
}
