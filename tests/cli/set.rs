//! Tests for `keepath set`.

use crate::support::*;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_set_creates_database_when_missing() {
    let t = Test::new();
    assert!(!t.db_path().exists());

    let value = t.set_json("/a/b/c", &["--username", "u", "--password", "p"]);

    assert!(t.db_path().exists());
    assert_eq!(value["changed"], true);
    assert_eq!(value["path"], "/a/b/c");
    assert_eq!(
        value["secret"],
        json!({"c": {"username": "u", "password": "p"}})
    );
}

#[test]
fn test_set_without_force_leaves_existing() {
    let t = Test::with_secrets(&[("/a/c", "old-user", "old-pass")]);

    let value = t.set_json("/a/c", &["--username", "new-user"]);
    assert_eq!(value["changed"], false);
    assert_eq!(value["secret"]["c"]["username"], "old-user");

    let read = t.get_json("/a/c");
    assert_eq!(
        read["secret"],
        json!({"c": {"username": "old-user", "password": "old-pass"}})
    );

    let output = t.set("/a/c", &["--username", "new-user"]);
    assert_success(&output);
    assert_stdout_contains(&output, "left untouched");
}

#[test]
fn test_set_force_replaces_entry() {
    let t = Test::init();
    t.set_json("/svc/key", &["--username", "u", "-P", "legacy=1"]);

    let value = t.set_json("/svc/key", &["--password", "fresh", "--force"]);
    assert_eq!(value["changed"], true);

    let read = t.get_json("/svc/key");
    assert_eq!(read["secret"], json!({"key": {"password": "fresh"}}));
}

#[test]
fn test_set_custom_properties() {
    let t = Test::init();

    t.set_json(
        "/svc/key",
        &[
            "-P",
            "gender=Male",
            "--property",
            "dsn=host=db port=5432",
            "--properties-json",
            r#"{"retries": 3, "tls": true}"#,
        ],
    );

    let read = t.get_json("/svc/key");
    assert_eq!(
        read["secret"]["key"],
        json!({"gender": "Male", "dsn": "host=db port=5432", "retries": "3", "tls": "true"})
    );
}

#[test]
fn test_set_root_level() {
    let t = Test::init();

    let value = t.set_json("solo", &["--username", "root"]);
    assert_eq!(value["secret"], json!({"solo": {"username": "root"}}));

    let group = t.group_json("/solo");
    assert_eq!(group["group"], json!([]));
}

#[test]
fn test_set_check_does_not_write() {
    let t = Test::init();
    let before = std::fs::read(t.db_path()).unwrap();

    let output = t
        .cmd()
        .args(["set", "/a/b", "--username", "u", "--check", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    let value = json(&output);
    assert_eq!(value["changed"], true);
    assert_eq!(value["secret"], json!({}));

    assert_eq!(std::fs::read(t.db_path()).unwrap(), before);
    assert_eq!(t.get_json("/a/b"), json!({"secret": {}}));
}

#[test]
fn test_set_check_on_existing_entry() {
    let t = Test::with_secrets(&[("/a/b", "u", "p")]);

    t.cmd()
        .args(["set", "/a/b", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));

    t.cmd()
        .args(["set", "/a/b", "--check", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"));
}

#[test]
fn test_set_invalid_property_rejected() {
    let t = Test::init();

    t.cmd()
        .args(["set", "/a/b", "-P", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}
