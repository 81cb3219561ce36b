//! Integration tests for the pfmt binary

use std::process::Command;

/// Run pfmt, returning stdout, stderr and exit code
fn run_pfmt(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pfmt"))
        .args(args)
        .output()
        .expect("Failed to execute pfmt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn print_wraps_text_in_color_and_reset() {
    let (stdout, _, code) = run_pfmt(&["print", "hello\n", "1"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "\x1b[38;5;1mhello\x1b[0m\n");
}

#[test]
fn print_line_appends_terminator() {
    let (stdout, _, code) = run_pfmt(&["--line", "print", "hi", "-3"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "\x1b[48;5;3mhi\x1b[0m\n");
}

#[test]
fn multi_drops_segments_without_codes() {
    let (stdout, _, code) = run_pfmt(&["multi", "a%hb%hc", "1", "2"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "\x1b[38;5;1ma\x1b[0m\x1b[38;5;2mb\x1b[0m\x1b[0m");
}

#[test]
fn fb_accepts_negative_background() {
    let (stdout, _, code) = run_pfmt(&["fb", "text", "5", "-10"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("\x1b[38;5;5m\x1b[48;5;10m"));
}

#[test]
fn fb_invalid_combination_fails_without_output() {
    let (stdout, stderr, code) = run_pfmt(&["fb", "text", "-5", "-10"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid color combination"), "stderr: {stderr}");
}

#[test]
fn strip_keeps_reset() {
    let (stdout, _, code) = run_pfmt(&["strip", "\x1b[38;5;4mhi\x1b[0m"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "hi\x1b[0m\n");
}

#[test]
fn apply_replaces_color() {
    let (stdout, _, _) = run_pfmt(&["apply", "\x1b[38;5;4mhi", "9"]);
    assert_eq!(stdout, "\x1b[38;5;9mhi\x1b[0m\n");
}

#[test]
fn valid_exit_status() {
    assert_eq!(run_pfmt(&["valid", "-231"]).2, 0);
    assert_eq!(run_pfmt(&["valid", "231"]).2, 0);
    assert_ne!(run_pfmt(&["valid", "232"]).2, 0);
}

#[test]
fn colors_lists_every_code() {
    let (stdout, _, code) = run_pfmt(&["colors"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\x1b[48;5;231m-231\x1b[0m"));
    assert!(stdout.ends_with("\x1b[38;5;231m231\x1b[0m \n"));
}

#[test]
fn fonts_lists_styles() {
    let (stdout, _, code) = run_pfmt(&["fonts"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\x1b[1mBOLD\x1b[0m"));
    assert!(stdout.contains("\x1b[3mITALIC\x1b[0m"));
}
