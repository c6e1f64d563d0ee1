//! Tests for the `check` CLI command
//!
//! Exit codes: 0 when the corpus is clean (warnings allowed), 4 when any
//! error-severity issue is found. The report goes to stdout either way.

use crate::common::samples::BROKEN_C;
use crate::common::{
    assert_contains, assert_not_contains, assert_valid_json, issue_checks, TestCorpus,
};

#[test]
fn test_check_reference_fixtures() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["check"]);
    assert_contains(&output, "checked 3 fixture(s) in 2 language(s)");
    assert_contains(&output, "ok (0 warning(s))");
}

#[test]
fn test_check_bundled() {
    let tc = TestCorpus::new();
    let output = tc.run_cli_success(&["check", "--bundled", "-f", "json"]);
    let json = assert_valid_json(&output, "check --bundled");
    assert_eq!(json["ok"], true);
    assert_eq!(json["files_checked"], 18);
    assert_eq!(json["languages"]["go"], 2);
}

#[test]
fn test_check_all_languages() {
    let tc = TestCorpus::new();
    tc.with_all_languages();

    let output = tc.run_cli_success(&["check", "-f", "json"]);
    let json = assert_valid_json(&output, "check all languages");
    assert_eq!(json["ok"], true, "{}", json);
    assert_eq!(json["files_checked"], 13);
}

#[test]
fn test_check_syntax_error_fails() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures().add_fixture("c/broken_valid.c", BROKEN_C);

    let (stdout, stderr) = tc.run_cli_failure(&["check"], 4);
    assert_contains(&stdout, "ERROR");
    assert_contains(&stdout, "unexpected_syntax_errors");
    assert_contains(&stdout, "broken_valid.c");
    assert_contains(&stderr, "Corpus check failed with 1 error(s)");
}

#[test]
fn test_check_failure_json() {
    let tc = TestCorpus::new();
    tc.add_fixture("c/valid.c", BROKEN_C);

    let (stdout, _) = tc.run_cli_failure(&["check", "-f", "json"], 4);
    let json = assert_valid_json(&stdout, "failing check json");
    assert_eq!(json["ok"], false);
    assert_eq!(json["errors"], 1);
    assert_eq!(issue_checks(&json), vec!["unexpected_syntax_errors"]);
    assert!(json["issues"][0]["syntax"]["error_count"].as_u64().unwrap() >= 1);
}

#[test]
fn test_check_no_syntax() {
    let tc = TestCorpus::new();
    tc.add_fixture("c/valid.c", BROKEN_C);

    let output = tc.run_cli_success(&["check", "--no-syntax"]);
    assert_contains(&output, "ok");
}

#[test]
fn test_check_language_filter() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures().add_fixture("go/valid.go", "package main\n\nfunc main( {\n");

    let output = tc.run_cli_success(&["check", "--lang", "cpp"]);
    assert_contains(&output, "checked 2 fixture(s) in 1 language(s)");

    tc.run_cli_failure(&["check", "--lang", "go"], 4);
}

#[test]
fn test_check_unknown_directory() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures()
        .add_fixture("fortran/valid.f90", "program hi\nend program hi\n");

    let (stdout, _) = tc.run_cli_failure(&["check", "-f", "json"], 4);
    let json = assert_valid_json(&stdout, "unknown dir");
    assert_eq!(issue_checks(&json), vec!["unknown_language_dir"]);
}

#[test]
fn test_check_warnings_only() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures()
        .add_fixture("README.md", "# fixtures\n")
        .add_dir("rust");

    let output = tc.run_cli_success(&["check"]);
    assert_contains(&output, "WARN");
    assert_contains(&output, "stray_file");
    assert_contains(&output, "empty_language_dir");
    assert_contains(&output, "ok (2 warning(s))");
    assert_not_contains(&output, "ERROR");
}

#[test]
fn test_check_empty_fixture() {
    let tc = TestCorpus::new();
    tc.add_fixture("python/valid.py", "");

    tc.run_cli_failure(&["check"], 4);
    tc.run_cli_success(&["check", "--allow-empty"]);
}

#[test]
fn test_check_verbose_lists_languages() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures();

    let output = tc.run_cli_success(&["check", "-v"]);
    assert_contains(&output, "  cpp          2");
}

#[test]
fn test_check_uses_config_file() {
    let tc = TestCorpus::new();
    tc.add_fixture("c++/valid.cpp", "int main() { return 0; }\n")
        .add_fixture("python/valid.py", "")
        .add_workspace_file(
            "fixture-corpus.toml",
            "[corpus]\nroot = \"languages\"\n\n[corpus.aliases]\n\"c++\" = \"cpp\"\n\n[check]\nallow_empty = true\n",
        );

    let output = tc.run_cli_success(&["check", "-f", "json"]);
    let json = assert_valid_json(&output, "check with config");
    assert_eq!(json["ok"], true, "{}", json);
    assert_eq!(json["languages"]["cpp"], 1);
}

#[test]
fn test_check_bad_config() {
    let tc = TestCorpus::new();
    tc.with_reference_fixtures()
        .add_workspace_file("bad.toml", "[corpus.aliases]\n\"c++\" = \"cplusplus\"\n");

    let (_, stderr) = tc.run_cli_failure(&["--config", "bad.toml", "check"], 5);
    assert_contains(&stderr, "cplusplus");
}

#[cfg(unix)]
#[test]
fn test_check_symlinked_language_directory() {
    let tc = TestCorpus::new();
    tc.add_workspace_file("shared/cpp/valid.cpp", "int main() { return 0; }\n")
        .add_symlink("cpp", "shared/cpp");

    let output = tc.run_cli_success(&["check", "-f", "json"]);
    let json = assert_valid_json(&output, "symlinked language dir");
    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["languages"]["cpp"], 1);
    assert_eq!(json["warnings"], 0);
}
