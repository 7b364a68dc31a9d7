//! Error reporting tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_blank_path_rejected_by_every_command() {
    let t = Test::new();

    for args in [
        vec!["get", ""],
        vec!["group", "   "],
        vec!["set", "", "--username", "u"],
    ] {
        t.cmd()
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid path"));
    }

    // rejected before the store is touched
    assert!(!t.db_path().exists());
}

#[test]
fn test_slashes_only_path_rejected() {
    let t = Test::init();

    t.cmd()
        .args(["get", "///"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no segments"));
}

#[test]
fn test_read_without_database_hints_init() {
    let t = Test::new();

    let output = t.get("/a/b");
    assert_failure(&output);
    assert_stderr_contains(&output, "read-secret /a/b");
    assert_stderr_contains(&output, "database not found");
    assert_stderr_contains(&output, "keepath init");
}

#[test]
fn test_wrong_password_fails() {
    let t = Test::with_secrets(&[("/a/b", "u", "p")]);

    let output = t
        .bare_cmd()
        .env("KEEPATH_PASSWORD", "wrong")
        .args(["group", "/a"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "read-group /a");
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let t = Test::with_secrets(&[("/a/b", "u", "p")]);

    let output = t.cmd().args(["--verbose", "get", "/a/b"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "opening database");

    let output = t.get("/a/b");
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_logs_never_contain_passwords() {
    let t = Test::init();

    let output = t
        .cmd()
        .env("KEEPATH_LOG", "keepath=trace")
        .args(["set", "/a/b", "--password", "top-secret-value"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!stderr(&output).contains("top-secret-value"));
}

#[test]
fn test_completions() {
    let t = Test::new();

    t.bare_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keepath"));
}
