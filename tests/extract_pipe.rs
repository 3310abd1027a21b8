//! Integration tests for basic extraction through the binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn jex() -> Command {
    let mut cmd = Command::cargo_bin("jex").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/jex-test-no-config");
    cmd
}

#[test]
fn pure_json_line() {
    let input = r#"{"level":"info","message":"hello"}"#;
    jex()
        .arg("--compact")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"level":"info","message":"hello"}"#,
        ));
}

#[test]
fn pure_json_adds_no_inner_for_plain_message() {
    let input = r#"{"level":"info","message":"hello"}"#;
    let output = jex().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("innerJson"),
        "message without embedded structure must not grow innerJson"
    );
}

#[test]
fn timestamp_prefix_stripped() {
    // Exactness: prefix + J recovers J itself.
    let input = r#"2025-10-16T02:53:16.018041779Z {"level":"info","message":"ok"}"#;
    jex()
        .arg("--compact")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"level":"info","message":"ok"}"#))
        .stdout(predicate::str::contains("2025-10-16").not());
}

#[test]
fn escaped_json_in_message_recovered() {
    let input = r#"x {"level":"info","message":"user login: {\"username\":\"testuser\",\"ip\":\"192.168.1.1\"}"}"#;
    jex()
        .arg("--compact")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""innerJson":{"username":"testuser","ip":"192.168.1.1"}"#,
        ))
        .stdout(predicate::str::contains("user login"));
}

#[test]
fn plain_text_passes_through() {
    let input = "plain text, no braces at all";
    jex()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::eq("plain text, no braces at all\n"));
}

#[test]
fn leftmost_span_wins() {
    let input = r#"{"a":1} extra {"b":2}"#;
    jex()
        .arg("--compact")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::eq("{\"a\":1}\n"));
}

#[test]
fn pretty_output_is_default() {
    let input = r#"{"a":1}"#;
    let output = jex().write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"a\": 1"), "default output is indented");
}

#[test]
fn deep_mode_structures_every_string() {
    let input = r#"{"payload":"{\"n\":1}","note":"hello"}"#;
    jex()
        .args(["--compact", "--deep"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""payload":{"n":1}"#))
        .stdout(predicate::str::contains(r#""note":"hello""#));
}

#[test]
fn multiline_stream() {
    let input = "\
{\"level\":\"info\",\"message\":\"one\"}\n\
no structure here\n\
prefix {\"level\":\"warn\",\"message\":\"two\"}\n";
    let output = jex().arg("--compact").write_stdin(input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""message":"one""#));
    assert!(stdout.contains("no structure here"));
    assert!(stdout.contains(r#""message":"two""#));
}

#[test]
fn recovered_output_reextracts_identically() {
    // Idempotence: feeding recovered compact JSON back in reproduces it.
    let input = r#"{"level":"info","message":"login: {\"u\":1}"}"#;
    let first = jex().arg("--compact").write_stdin(input).output().unwrap();
    let first_out = String::from_utf8_lossy(&first.stdout).trim().to_string();

    let second = jex()
        .arg("--compact")
        .write_stdin(first_out.clone())
        .output()
        .unwrap();
    let second_out = String::from_utf8_lossy(&second.stdout).trim().to_string();
    assert_eq!(first_out, second_out);
}
