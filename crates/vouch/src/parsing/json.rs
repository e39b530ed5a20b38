//! JSON parser

use serde::de::DeserializeOwned;

use crate::foundation::ValidationError;
use crate::outcome::Outcome;
use crate::parsing::reject_blank;

/// Parses a JSON string into any deserializable type.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::parsing::parse_json;
///
/// let tags: Outcome<Vec<String>> = parse_json(r#"["a", "b"]"#);
/// assert!(tags.is_success());
/// ```
pub fn parse_json<T>(input: &str) -> Outcome<T>
where
    T: DeserializeOwned,
{
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match serde_json::from_str(cleaned) {
        Ok(value) => Outcome::Success(value),
        Err(e) => Outcome::Failure(
            ValidationError::new("parse_error", "Input must be valid JSON")
                .with_param("detail", e.to_string()),
        ),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_typed() {
        let numbers: Outcome<Vec<i64>> = parse_json("[1, 2, 3]");
        assert_eq!(numbers, Outcome::Success(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_json_value() {
        let value: Outcome<serde_json::Value> = parse_json(r#"{"name": "alice"}"#);
        assert_eq!(value.value()["name"], "alice");
    }

    #[test]
    fn test_parse_json_rejects_malformed_input() {
        let outcome: Outcome<serde_json::Value> = parse_json("{broken");
        let error = outcome.error();
        assert_eq!(error.message, "Input must be valid JSON");
        assert!(error.param("detail").is_some());
    }

    #[test]
    fn test_parse_json_rejects_mismatched_types() {
        let outcome: Outcome<Vec<i64>> = parse_json(r#""a string""#);
        assert!(outcome.is_failure());
    }
}
