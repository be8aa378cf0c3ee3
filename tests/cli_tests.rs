use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn writes_obfuscated_output() {
    let input = input_file("My SSN is 123-45-6789 and another one is 987-65-4321.\n");
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .arg("--identifier_type")
        .arg("ssn")
        .assert()
        .success()
        .stderr(predicate::str::contains("Data obfuscated and written to"));

    let written = fs::read_to_string(&output).unwrap();
    let shape =
        Regex::new(r"^My SSN is \d{3}-\d{2}-\d{4} and another one is \d{3}-\d{2}-\d{4}\.\n$")
            .unwrap();
    assert!(shape.is_match(&written), "unexpected output: {}", written);
    assert!(!written.contains("123-45-6789"));
    assert!(!written.contains("987-65-4321"));
}

#[test]
fn defaults_to_ssn() {
    let input = input_file("id 123-45-6789");
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .assert()
        .success();

    assert!(!fs::read_to_string(&output).unwrap().contains("123-45-6789"));
}

#[test]
fn shared_replacement_reuses_value() {
    let input = input_file("111-22-3333 444-55-6666");
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .args(["--replacement", "shared", "--log-format", "text"])
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let values: Vec<&str> = written.split(' ').collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0], values[1]);
}

#[test]
fn unsupported_type_exits_non_zero_without_output() {
    let input = input_file("123-45-6789");
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .args(["--identifier-type", "dob"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("dob").and(predicate::str::contains("ssn")));

    assert!(!output.exists());
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn unwritable_output_exits_non_zero() {
    let input = input_file("123-45-6789");
    let dir = tempdir().unwrap();

    Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(input.path())
        .arg(dir.path().join("no/such/dir/out.txt"))
        .assert()
        .failure()
        .code(1);
}

#[test]
fn dry_run_prints_summary_and_skips_output() {
    let input = input_file("a 111-22-3333 b 444-55-6666 c");
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let assert = Command::cargo_bin("id-obfuscator")
        .unwrap()
        .arg(input.path())
        .arg(&output)
        .arg("--dry-run")
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["identifier_type"], "ssn");
    assert_eq!(summary["replacements"], 2);
    assert_eq!(summary["mode"], "per-match");
    assert_eq!(summary["dry_run"], true);
    assert!(summary["output_file"].is_null());
    assert!(!output.exists());
}
