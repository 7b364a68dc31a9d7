//! Tests for `keepath get`.

use crate::support::*;
use serde_json::json;

#[test]
fn test_get_json_keyed_by_terminal_segment() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let value = t.get_json("/prod/db/admin");
    assert_eq!(
        value,
        json!({"secret": {"admin": {"username": "postgres", "password": "pg-secret"}}})
    );
}

#[test]
fn test_get_missing_secret_is_empty_not_error() {
    let t = Test::init();

    let value = t.get_json("/nowhere/at/all");
    assert_eq!(value, json!({"secret": {}}));

    let output = t.get("/nowhere/at/all");
    assert_success(&output);
    assert_stdout_contains(&output, "no secret at /nowhere/at/all");
}

#[test]
fn test_get_masks_password_unless_revealed() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.get("/solo");
    assert_success(&output);
    assert_stdout_contains(&output, "root");
    assert_stdout_excludes(&output, "toor");

    let output = t.cmd().args(["get", "/solo", "--reveal"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "toor");
}

#[test]
fn test_get_normalizes_slashes() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let value = t.get_json("prod//db/admin/");
    assert_eq!(value["secret"]["admin"]["username"], "postgres");
}

#[test]
fn test_get_is_case_sensitive() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let value = t.get_json("/Prod/db/admin");
    assert_eq!(value, json!({"secret": {}}));
}
