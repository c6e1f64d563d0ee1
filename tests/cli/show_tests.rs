//! Tests for the `show` CLI command

use crate::common::{assert_contains, assert_valid_json, TestCorpus};

#[test]
fn test_show_raw_outputs_exact_bytes() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli(&["show", "cpp/valid.cpp", "--raw"]);
    assert!(output.status.success());

    let expected = std::fs::read(tc.root().join("cpp/valid.cpp")).unwrap();
    assert_eq!(output.stdout, expected);
}

#[test]
fn test_show_raw_non_utf8() {
    let tc = TestCorpus::new();
    tc.add_bytes("c/latin1.c", &[0x2f, 0x2f, 0x20, 0xe9, 0x0a]);

    let output = tc.run_cli(&["show", "c/latin1.c", "--raw"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x2f, 0x2f, 0x20, 0xe9, 0x0a]);
}

#[test]
fn test_show_metadata_json() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["show", "cpp/comprehensive.cpp", "-f", "json"]);
    let json = assert_valid_json(&output, "show json");
    assert_eq!(json["lang"], "cpp");
    assert_eq!(json["extension_lang"], "cpp");
    assert_eq!(json["kind"], "comprehensive");
    assert_eq!(json["expectation"], "clean");
    assert_eq!(json["utf8"], true);
    assert!(json["bytes"].as_u64().unwrap() > 0);
}

#[test]
fn test_show_metadata_text() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["show", "c/valid.c"]);
    assert_contains(&output, "language:    c (C)");
    assert_contains(&output, "kind:        valid");
}

#[test]
fn test_show_accepts_dot_prefixed_path() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["show", "./c/valid.c", "-f", "json"]);
    let json = assert_valid_json(&output, "show ./c/valid.c");
    assert_eq!(json["path"], "c/valid.c");
    assert_eq!(json["lang"], "c");
}

#[test]
fn test_show_missing_fixture() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let (_, stderr) = tc.run_cli_failure(&["show", "go/valid.go"], 1);
    assert_contains(&stderr, "File not found");
}
