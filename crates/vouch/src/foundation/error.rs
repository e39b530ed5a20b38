//! Error types for parse and validation failures
//!
//! The canonical error payload is the structured [`ValidationError`]; a bare
//! message string converts into it and the human-readable view is derived
//! from it, never maintained separately.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error with a machine-readable code, a
/// human-readable message, and optional field path, parameters, and nested
/// errors.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::foundation::ValidationError;
///
/// // Static strings — zero allocation:
/// let error = ValidationError::new("minimum", "Value must be at least 0");
///
/// // With a field path and parameters:
/// let error = ValidationError::new("out_of_range", "Value must be between 0 and 120")
///     .with_path(".user.age")
///     .with_param("min", "0")
///     .with_param("max", "120");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "minimum", "parse_error", "not_empty"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional path to the field that failed.
    ///
    /// Examples: ".user.email", ".items[0].name"
    pub path: Option<Cow<'static, str>>,

    /// Parameters describing the failed check, as ordered key-value pairs.
    ///
    /// Example: `[("min", "0"), ("actual", "-1")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested errors, for failures aggregated from several checks.
    pub nested: Vec<ValidationError>,

    /// Optional suggestion for fixing the input.
    pub help: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            params: Vec::new(),
            nested: Vec::new(),
            help: None,
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_path(mut self, path: impl Into<Cow<'static, str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Adds a suggestion for fixing the input.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error carries nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Converts the error to a JSON value for serialization.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "path": self.path,
            "params": params,
            "help": self.help,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{path}: {}", self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  Help: {help}")?;
        }

        for error in &self.nested {
            write!(f, "\n  - {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        Self::custom(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::custom(message)
    }
}

impl From<Cow<'static, str>> for ValidationError {
    fn from(message: Cow<'static, str>) -> Self {
        Self::custom(message)
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "custom" error carrying only a message.
    ///
    /// This is the canonical form of a bare-string failure.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// Used by the aggregating validation mode, which runs every validator and
/// collects each failure instead of stopping at the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: Vec<ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a single error with the collection nested under it.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("validation_errors", message).with_nested(self.errors)
    }

    /// Converts to a Result, succeeding when the collection is empty.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("minimum", "Value must be at least 0");
        assert_eq!(error.code, "minimum");
        assert_eq!(error.message, "Value must be at least 0");
    }

    #[test]
    fn test_error_with_path() {
        let error = ValidationError::new("not_empty", "String must not be empty")
            .with_path(".user.email");
        assert_eq!(error.path.as_deref(), Some(".user.email"));
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("minimum", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_display_prefixes_path() {
        let error = ValidationError::new("x", "Error message").with_path(".field");
        assert_eq!(error.to_string(), ".field: Error message");

        let bare = ValidationError::new("x", "Error message");
        assert_eq!(bare.to_string(), "Error message");
    }

    #[test]
    fn test_display_appends_help() {
        let error = ValidationError::new("pattern", "Value must match pattern ^#")
            .with_help("Start the tag with '#'");
        assert_eq!(
            error.to_string(),
            "Value must match pattern ^#\n  Help: Start the tag with '#'"
        );
    }

    #[test]
    fn test_string_converts_to_custom_error() {
        let error: ValidationError = "bad input".into();
        assert_eq!(error.code, "custom");
        assert_eq!(error.message, "bad input");
    }

    #[test]
    fn test_nested_errors() {
        let error = ValidationError::new("validation_errors", "Several checks failed")
            .with_nested(vec![
                ValidationError::new("minimum", "Too small"),
                ValidationError::new("pattern", "Bad format"),
            ]);

        assert!(error.has_nested());
        assert_eq!(error.nested.len(), 2);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("not_empty", "String must not be empty");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("first", "First error"));
        errors.add(ValidationError::new("second", "Second error"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert!(errors.clone().into_result(()).is_err());
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
    }

    #[test]
    fn test_collection_into_single_error() {
        let errors: ValidationErrors = vec![
            ValidationError::new("a", "A"),
            ValidationError::new("b", "B"),
        ]
        .into_iter()
        .collect();

        let single = errors.into_single_error("Input rejected");
        assert_eq!(single.code, "validation_errors");
        assert_eq!(single.nested.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = ValidationError::new("minimum", "Too small")
            .with_path(".age")
            .with_param("min", "0");
        let json = error.to_json_value();
        assert_eq!(json["code"], "minimum");
        assert_eq!(json["path"], ".age");
        assert_eq!(json["params"]["min"], "0");
    }
}
