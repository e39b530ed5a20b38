//! Regular-expression validators

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::validators::matches_regex;
/// use vouch::foundation::Validate;
///
/// let validator = matches_regex(r"^[a-z0-9_]+$").unwrap();
/// assert!(validator.validate("snake_case_42").is_ok());
/// assert!(validator.validate("Not Snake Case").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: Regex,
}

impl MatchesRegex {
    /// Compiles `pattern` into a validator.
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ValidationError> {
        match Regex::new(pattern) {
            Ok(compiled) => Ok(Self { pattern: compiled }),
            Err(e) => Err(ValidationError::new(
                "invalid_pattern",
                format!("Invalid regular expression: {e}"),
            )),
        }
    }

    /// Wraps a prebuilt regex.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "pattern",
                format!("Value must match pattern {}", self.pattern.as_str()),
            )
            .with_param("pattern", self.pattern.as_str().to_string()))
        }
    }
}

/// Compiles a pattern into a validator.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, ValidationError> {
    MatchesRegex::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
