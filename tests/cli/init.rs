//! Tests for `keepath init`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_init_creates_encrypted_database() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "created");

    let contents = std::fs::read_to_string(t.db_path()).unwrap();
    assert!(contents.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
    assert!(!contents.contains("[keepath]"));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    t.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_respects_db_flag() {
    let t = Test::new();

    t.cmd()
        .args(["init", "--db", "other.age"])
        .assert()
        .success();

    assert!(t.dir.path().join("other.age").exists());
    assert!(!t.db_path().exists());
}

#[test]
fn test_init_without_password_fails() {
    let t = Test::new();

    // stdin is not a terminal under the test harness, so there is no prompt
    t.bare_cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no password given"));
}
