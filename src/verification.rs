// Verification failure decoding
// Turns the proxy's check-verifications body into a flat list of messages

use serde_json::{Map, Value};

use crate::error::ParseError;

/// Parse a check-verifications response body.
///
/// An empty (or whitespace-only) body means no failures. Otherwise the body
/// must be exactly `{"errors": [{"message": "..."}, ...]}`; any deviation
/// rejects the whole body, no partial results are returned.
pub fn parse_verification_failures(body: &str) -> Result<Vec<String>, ParseError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let json: Value = serde_json::from_str(body).map_err(ParseError::Syntax)?;
    let root = expect_object(&json)?;
    let errors = sole_field(root, "errors")?;
    let entries = errors.as_array().ok_or(ParseError::UnexpectedType {
        expected: "array",
        found: kind(errors),
    })?;

    let mut failures = Vec::with_capacity(entries.len());
    for entry in entries {
        let message = sole_field(expect_object(entry)?, "message")?;
        match message.as_str() {
            Some(text) => failures.push(text.to_string()),
            None => {
                return Err(ParseError::UnexpectedType {
                    expected: "string",
                    found: kind(message),
                })
            }
        }
    }
    Ok(failures)
}

/// Same as `parse_verification_failures`, with a missing body treated as empty.
pub fn parse_optional_verification_failures(body: Option<&str>) -> Result<Vec<String>, ParseError> {
    parse_verification_failures(body.unwrap_or_default())
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, ParseError> {
    value.as_object().ok_or(ParseError::UnexpectedType {
        expected: "object",
        found: kind(value),
    })
}

/// The object must carry `name` and nothing else.
fn sole_field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, ParseError> {
    if let Some(other) = object.keys().find(|k| k.as_str() != name) {
        return Err(ParseError::UnexpectedField {
            expected: name,
            found: other.clone(),
        });
    }
    object
        .get(name)
        .ok_or(ParseError::MissingField { expected: name })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
