//! Date and identifier parsers

use chrono::NaiveDate;
use uuid::Uuid;

use crate::foundation::ValidationError;
use crate::outcome::Outcome;
use crate::parsing::reject_blank;

/// Parses a string to a date in strict ISO form (`YYYY-MM-DD`).
///
/// Other layouts must be parsed with an explicit format via
/// [`parse_date_with_format`].
pub fn parse_date(input: &str) -> Outcome<NaiveDate> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    // Standard ISO form only: ten characters with dashes in fixed positions.
    let bytes = cleaned.as_bytes();
    let iso_shaped = cleaned.len() == 10 && bytes.get(4) == Some(&b'-') && bytes.get(7) == Some(&b'-');
    if !iso_shaped {
        return Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid date",
        ));
    }

    match NaiveDate::parse_from_str(cleaned, "%Y-%m-%d") {
        Ok(date) => Outcome::Success(date),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid date",
        )),
    }
}

/// Parses a string to a date with an explicit `strftime`-style format.
pub fn parse_date_with_format(input: &str, format: &str) -> Outcome<NaiveDate> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match NaiveDate::parse_from_str(cleaned, format) {
        Ok(date) => Outcome::Success(date),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid date",
        )),
    }
}

/// Parses a string to a UUID.
pub fn parse_uuid(input: &str) -> Outcome<Uuid> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match Uuid::parse_str(cleaned) {
        Ok(uuid) => Outcome::Success(uuid),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid UUID",
        )),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        let date = parse_date("2026-08-05").value();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
    }

    #[test]
    fn test_parse_date_trims() {
        assert!(parse_date("  2026-08-05  ").is_success());
    }

    #[test]
    fn test_parse_date_rejects_non_iso_layouts() {
        // Non-standard layouts need an explicit format.
        assert!(parse_date("05/08/2026").is_failure());
        assert!(parse_date("20260805").is_failure());
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("2026-02-30").is_failure());
        assert!(parse_date("2026-13-01").is_failure());
    }

    #[test]
    fn test_parse_date_with_format() {
        let date = parse_date_with_format("05/08/2026", "%d/%m/%Y").value();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        assert!(parse_date_with_format("garbage", "%d/%m/%Y").is_failure());
    }

    #[test]
    fn test_parse_uuid() {
        assert!(parse_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8").is_success());
        let error = parse_uuid("not-a-uuid").error();
        assert_eq!(error.message, "Input must be a valid UUID");
    }
}
