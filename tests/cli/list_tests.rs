//! Tests for the `list` CLI command

use crate::common::{assert_contains, assert_valid_json, json_paths, TestCorpus};

#[test]
fn test_list_reference_fixtures_text() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["list"]);
    assert_contains(&output, "comprehensive");
    assert_contains(&output, "valid.c");
    assert_contains(&output, "3 fixture(s) in 2 language(s)");
}

#[test]
fn test_list_json() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["list", "-f", "json"]);
    let json = assert_valid_json(&output, "list json");
    assert_eq!(json["count"], 3);
    assert_eq!(
        json_paths(&json, "fixtures"),
        vec!["c/valid.c", "cpp/comprehensive.cpp", "cpp/valid.cpp"]
    );
    assert_eq!(json["fixtures"][0]["lang"], "c");
    assert_eq!(json["fixtures"][1]["kind"], "comprehensive");
    assert_eq!(json["languages"], serde_json::json!(["c", "cpp"]));
}

#[test]
fn test_list_filter_by_language() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["list", "--lang", "cpp", "-f", "json"]);
    let json = assert_valid_json(&output, "list --lang");
    assert_eq!(
        json_paths(&json, "fixtures"),
        vec!["cpp/comprehensive.cpp", "cpp/valid.cpp"]
    );
}

#[test]
fn test_list_unknown_language_filter() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let (_, stderr) = tc.run_cli_failure(&["list", "--lang", "cobol"], 2);
    assert_contains(&stderr, "cobol");
}

#[test]
fn test_list_bundled() {
    let tc = TestCorpus::new();
    let output = tc.run_cli_success(&["--bundled", "list", "-f", "json"]);
    let json = assert_valid_json(&output, "list --bundled");
    assert_eq!(json["count"], 18);
    assert_eq!(json["languages"].as_array().unwrap().len(), 13);
}

#[test]
fn test_list_alias() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["ls", "-f", "json"]);
    let json = assert_valid_json(&output, "ls alias");
    assert_eq!(json["count"], 3);
}
