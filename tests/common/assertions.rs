//! Custom assertions for integration tests

use serde_json::Value;

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Assert that output contains the given substring
pub fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected output to contain '{}'\nOutput:\n{}",
        needle,
        output
    );
}

/// Assert that output does not contain the given substring
pub fn assert_not_contains(output: &str, needle: &str) {
    assert!(
        !output.contains(needle),
        "Expected output NOT to contain '{}'\nOutput:\n{}",
        needle,
        output
    );
}

/// Collect the `path` field of every entry in a JSON array field
pub fn json_paths(json: &Value, field: &str) -> Vec<String> {
    json[field]
        .as_array()
        .unwrap_or_else(|| panic!("JSON missing '{}' array:\n{}", field, json))
        .iter()
        .filter_map(|entry| entry["path"].as_str())
        .map(|p| p.replace('\\', "/"))
        .collect()
}

/// Collect the `check` field of every issue in a check report
pub fn issue_checks(json: &Value) -> Vec<String> {
    json["issues"]
        .as_array()
        .unwrap_or_else(|| panic!("JSON missing 'issues' array:\n{}", json))
        .iter()
        .filter_map(|issue| issue["check"].as_str())
        .map(str::to_string)
        .collect()
}
