//! Tests for `keepath group`.

use crate::support::*;
use serde_json::json;

#[test]
fn test_group_lists_direct_entries() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let value = t.group_json("/prod/db");
    assert_eq!(value["path"], "/prod/db");
    assert_eq!(
        value["group"],
        json!([
            {"admin": {"username": "postgres", "password": "pg-secret"}},
            {"reader": {"username": "readonly", "password": "ro-secret"}},
        ])
    );
}

#[test]
fn test_group_does_not_descend_into_subgroups() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let value = t.group_json("/prod");
    let group = value["group"].as_array().unwrap();
    assert_eq!(group.len(), 1);
    assert!(group[0].get("api").is_some());
}

#[test]
fn test_group_missing_is_empty() {
    let t = Test::init();

    let value = t.group_json("/nonexistent");
    assert_eq!(value["group"], json!([]));

    let output = t.group("/nonexistent");
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets under /nonexistent");
}

#[test]
fn test_group_human_output_masks_passwords() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.group("/prod/db");
    assert_success(&output);
    assert_stdout_contains(&output, "admin");
    assert_stdout_contains(&output, "reader");
    assert_stdout_excludes(&output, "pg-secret");
}
