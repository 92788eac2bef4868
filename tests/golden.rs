//! Golden file integration tests.
//!
//! Reads tests/testdata/experiments_golden.json and verifies the wire
//! responses and error messages for known experiment requests.

use serde::Deserialize;
use serde_json::Value;

use chemlab_core::dispatch;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
    error_cases: Vec<GoldenErrorCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    request: Value,
    expect: Value,
}

#[derive(Deserialize)]
struct GoldenErrorCase {
    name: String,
    request: Value,
    expect_error: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/experiments_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TOLERANCE: f64 = 1e-9;

/// Assert that every expected field appears in the response, comparing
/// numbers to within the tolerance and everything else exactly.
fn assert_fields_match(case: &str, response: &Value, expect: &Value) {
    let expected_fields = expect.as_object().expect("expect must be an object");
    for (field, expected) in expected_fields {
        let actual = response
            .get(field)
            .unwrap_or_else(|| panic!("{case}: response missing field `{field}`"));
        match (expected.as_f64(), actual.as_f64()) {
            (Some(want), Some(got)) => {
                assert!(
                    (got - want).abs() < TOLERANCE,
                    "{case}: field `{field}` = {got}, expected {want}",
                );
            }
            _ => assert_eq!(actual, expected, "{case}: field `{field}` mismatch"),
        }
    }
}

// ---------------------------------------------------------------------------
// Golden: wire responses
// ---------------------------------------------------------------------------

#[test]
fn golden_responses() {
    let data = load_golden_data();
    assert!(!data.cases.is_empty());

    for case in &data.cases {
        let result = dispatch::run_json(&case.request)
            .unwrap_or_else(|e| panic!("{}: unexpected error {e}", case.name));
        let response = serde_json::to_value(&result).expect("result must serialize");
        assert_fields_match(&case.name, &response, &case.expect);
    }
}

// ---------------------------------------------------------------------------
// Golden: error messages
// ---------------------------------------------------------------------------

#[test]
fn golden_errors() {
    let data = load_golden_data();
    assert!(!data.error_cases.is_empty());

    for case in &data.error_cases {
        let err = dispatch::run_json(&case.request)
            .expect_err(&format!("{}: expected an error", case.name));
        assert_eq!(err.to_string(), case.expect_error, "{}", case.name);
    }
}

// ---------------------------------------------------------------------------
// Response shape: the tag always mirrors the request
// ---------------------------------------------------------------------------

#[test]
fn golden_responses_echo_request_tag() {
    let data = load_golden_data();

    for case in &data.cases {
        let result = dispatch::run_json(&case.request).unwrap();
        let response = serde_json::to_value(&result).unwrap();
        assert_eq!(
            response["experiment"], case.request["experiment"],
            "{}: tag mismatch",
            case.name
        );
    }
}
