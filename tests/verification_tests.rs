/// Tests for decoding the proxy's verification failure body
use martian_client::{parse_optional_verification_failures, parse_verification_failures, ParseError};

#[test]
fn test_empty_body_has_no_failures() {
    assert!(parse_verification_failures("").unwrap().is_empty());
    assert!(parse_optional_verification_failures(None).unwrap().is_empty());
    assert!(parse_optional_verification_failures(Some("")).unwrap().is_empty());
}

#[test]
fn test_single_failure() {
    let failures = parse_verification_failures(r#"{"errors":[{"message":"a"}]}"#).unwrap();
    assert_eq!(failures, vec!["a".to_string()]);
}

#[test]
fn test_failures_keep_proxy_order_and_duplicates() {
    let body = r#"{
        "errors": [
            {"message": "status code mismatch: got 404, want 200"},
            {"message": "header.Verifier: X-Test missing"},
            {"message": "status code mismatch: got 404, want 200"}
        ]
    }"#;
    let failures = parse_verification_failures(body).unwrap();
    assert_eq!(
        failures,
        vec![
            "status code mismatch: got 404, want 200",
            "header.Verifier: X-Test missing",
            "status code mismatch: got 404, want 200",
        ]
    );
}

#[test]
fn test_empty_errors_array() {
    assert!(parse_verification_failures(r#"{"errors":[]}"#).unwrap().is_empty());
}

#[test]
fn test_wrong_top_level_field() {
    let err = parse_verification_failures(r#"{"notErrors":[]}"#).unwrap_err();
    match err {
        ParseError::UnexpectedField { expected, found } => {
            assert_eq!(expected, "errors");
            assert_eq!(found, "notErrors");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_extra_top_level_field_is_rejected() {
    let err = parse_verification_failures(r#"{"errors":[],"warnings":[]}"#).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedField { expected: "errors", .. }));
}

#[test]
fn test_empty_object_is_missing_errors() {
    let err = parse_verification_failures("{}").unwrap_err();
    assert!(matches!(err, ParseError::MissingField { expected: "errors" }));
}

#[test]
fn test_malformed_entry_aborts_whole_parse() {
    // First entry is valid, but nothing is returned once the second fails
    let body = r#"{"errors":[{"message":"ok"},{"msg":"bad"}]}"#;
    let err = parse_verification_failures(body).unwrap_err();
    match err {
        ParseError::UnexpectedField { expected, found } => {
            assert_eq!(expected, "message");
            assert_eq!(found, "msg");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_object_shapes() {
    assert!(matches!(
        parse_verification_failures("[]").unwrap_err(),
        ParseError::UnexpectedType { expected: "object", found: "array" }
    ));
    assert!(matches!(
        parse_verification_failures(r#"{"errors":{}}"#).unwrap_err(),
        ParseError::UnexpectedType { expected: "array", found: "object" }
    ));
    assert!(matches!(
        parse_verification_failures(r#"{"errors":["a"]}"#).unwrap_err(),
        ParseError::UnexpectedType { expected: "object", found: "string" }
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        parse_verification_failures("{\"errors\": [").unwrap_err(),
        ParseError::Syntax(_)
    ));
}

#[test]
fn test_error_message_names_fields() {
    let err = parse_verification_failures(r#"{"notErrors":[]}"#).unwrap_err();
    assert_eq!(err.to_string(), "expected property: errors, got: notErrors");
}
