//! Binary-level smoke tests for the murk CLI.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn phrase_prints_requested_length() {
    Command::cargo_bin("murk")
        .unwrap()
        .args(["phrase", "--length", "8"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{8}\n$").unwrap());
}

#[test]
fn phrase_defaults_to_five_characters() {
    Command::cargo_bin("murk")
        .unwrap()
        .arg("phrase")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{5}\n$").unwrap());
}

#[test]
fn generate_with_tall_canvas_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("murk")
        .unwrap()
        .current_dir(dir.path())
        .args(["generate", "--width", "40", "--height", "50", "--seed", "1"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("must exceed height"));
}

#[test]
fn generate_without_resolvable_fonts_is_an_input_error() {
    // The builtin font paths are relative; in an empty temp dir none of
    // them resolves, so the render must abort on the font resource.
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("murk")
        .unwrap()
        .current_dir(dir.path())
        .args(["generate", "--seed", "1", "--out", "out.jpg"])
        .assert()
        .code(66)
        .stderr(predicate::str::contains("font"));
}
