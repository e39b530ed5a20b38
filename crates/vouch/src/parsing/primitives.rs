//! Parsers for integers, floats, and booleans

use crate::foundation::ValidationError;
use crate::outcome::Outcome;
use crate::parsing::reject_blank;

/// Parses a string to a 64-bit integer.
///
/// Whole-number float forms such as `"42.0"` are accepted; values with a
/// fractional part are rejected.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::parsing::parse_int;
///
/// assert!(parse_int("42").is_success());
/// assert!(parse_int("42.0").is_success());
/// assert!(parse_int("42.5").is_failure());
/// assert!(parse_int("abc").is_failure());
/// ```
pub fn parse_int(input: &str) -> Outcome<i64> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    if cleaned.contains('.') {
        // A float form is an integer only when nothing follows the point.
        return match cleaned.parse::<f64>() {
            Ok(value)
                if value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value <= i64::MAX as f64 =>
            {
                Outcome::Success(value as i64)
            }
            _ => Outcome::Failure(ValidationError::new(
                "parse_error",
                "Input must be a valid integer",
            )),
        };
    }

    match cleaned.parse::<i64>() {
        Ok(value) => Outcome::Success(value),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid integer",
        )),
    }
}

/// Parses a string to a 64-bit float.
pub fn parse_float(input: &str) -> Outcome<f64> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match cleaned.parse::<f64>() {
        Ok(value) => Outcome::Success(value),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid number",
        )),
    }
}

/// Parses a string to a boolean.
///
/// Accepts `true`/`t`/`yes`/`y`/`1` and `false`/`f`/`no`/`n`/`0`,
/// case-insensitively.
pub fn parse_bool(input: &str) -> Outcome<bool> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match cleaned.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Outcome::Success(true),
        "false" | "f" | "no" | "n" | "0" => Outcome::Success(false),
        _ => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid boolean",
        )),
    }
}

// ============================================================================
// TESTS
// ============================================================================
