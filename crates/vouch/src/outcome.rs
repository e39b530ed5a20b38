//! The success/failure outcome type that parsing and validation build on.
//!
//! [`Outcome`] is a closed two-variant result: [`Success`](Outcome::Success)
//! holds a typed value, [`Failure`](Outcome::Failure) holds a
//! [`ValidationError`]. Parsers produce it, validators refine it, and
//! [`bind`](Outcome::bind) chains the two so a failure anywhere in the chain
//! propagates untouched to the end.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! let age = parse_int("42").bind(|n| minimum(0).apply(n));
//! assert_eq!(age, Outcome::Success(42));
//!
//! let bad = parse_int("abc");
//! assert_eq!(bad.error_or("no error").message, "Input must be a valid integer");
//! ```

use std::fmt;

use crate::foundation::ValidationError;

/// The result of a parse or validation step.
///
/// Exactly one side exists per instance, and an instance is immutable once
/// constructed. A `Failure` is ordinary data — constructing one is not an
/// error condition, and no combinator on this type can panic on it. The only
/// panicking operations are [`value`](Outcome::value) and
/// [`error`](Outcome::error), which extract the wrong side: that is a logic
/// bug in the caller, not a data problem, and is deliberately kept on a
/// separate channel from validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an Outcome carries either a value or an error and must be inspected"]
pub enum Outcome<T> {
    /// The value was accepted.
    Success(T),
    /// The value was rejected, with the reason.
    Failure(ValidationError),
}

impl<T> Outcome<T> {
    /// Creates a `Success` holding `value`.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Creates a `Failure` holding `error`.
    ///
    /// Accepts anything convertible into a [`ValidationError`], including
    /// plain message strings.
    pub fn failure(error: impl Into<ValidationError>) -> Self {
        Outcome::Failure(error.into())
    }

    /// Returns `true` for a `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for a `Failure`.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Chains an operation that may itself fail.
    ///
    /// On `Success` the value is handed to `f` and `f`'s outcome is returned
    /// as-is. On `Failure` the error propagates unchanged and `f` is never
    /// invoked: `Failure(e).bind(f) == Failure(e)` for every `f`.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the held value with an infallible function.
    ///
    /// `map` can never produce a `Failure` on its own; a transform that can
    /// fail belongs in [`bind`](Outcome::bind) instead.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Rewrites the failure payload, leaving a `Success` untouched.
    ///
    /// This is how callers attach a custom message to a parser:
    ///
    /// ```rust,ignore
    /// let age = parse_int(input).map_failure(|_| "Please enter a number".into());
    /// ```
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(ValidationError) -> ValidationError,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Returns the held value, or `default` for a `Failure`. Never fails.
    #[must_use = "if the default is not needed, use `value()` instead"]
    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the held error, or `default` for a `Success`. Never fails.
    #[must_use = "if the default is not needed, use `error()` instead"]
    pub fn error_or(self, default: impl Into<ValidationError>) -> ValidationError {
        match self {
            Outcome::Success(_) => default.into(),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if called on a `Failure`. Reaching for the value of a failed
    /// outcome is a precondition violation; use [`value_or`](Outcome::value_or)
    /// or pattern matching when the failure case is expected.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::value()` on a `Failure`: {error}")
            }
        }
    }

    /// Returns the held error.
    ///
    /// # Panics
    ///
    /// Panics if called on a `Success`; see [`value`](Outcome::value).
    #[track_caller]
    pub fn error(self) -> ValidationError {
        match self {
            Outcome::Success(_) => {
                panic!("called `Outcome::error()` on a `Success` value")
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Borrows the held value, if any.
    #[must_use]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrows the held error, if any.
    #[must_use]
    pub fn as_failure(&self) -> Option<&ValidationError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, ValidationError> {
        self.into()
    }
}

impl<T> From<Result<T, ValidationError>> for Outcome<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ValidationError> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({value})"),
            Outcome::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_predicates() {
        let outcome = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_failure_predicates() {
        let outcome: Outcome<i32> = Outcome::failure("rejected");
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_failure_construction_is_not_an_error() {
        // The failure is the payload, not a raised error.
        let outcome: Outcome<i32> = Outcome::failure("anything");
        assert_eq!(outcome.error().message, "anything");
    }

    #[test]
    fn test_bind_applies_on_success() {
        let outcome = Outcome::success(21).bind(|n| Outcome::success(n * 2));
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[test]
    fn test_bind_propagates_failure_verbatim() {
        let error = ValidationError::new("range", "out of range").with_path(".age");
        let outcome: Outcome<i32> = Outcome::Failure(error.clone());
        let result = outcome.bind(|n| Outcome::success(n + 1));
        assert_eq!(result, Outcome::Failure(error));
    }

    #[test]
    fn test_map_wraps_on_success() {
        let outcome = Outcome::success(21).map(|n| n * 2);
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[test]
    fn test_map_identity_is_a_no_op() {
        let success = Outcome::success(7);
        assert_eq!(success.clone().map(|v| v), success);

        let failure: Outcome<i32> = Outcome::failure("nope");
        assert_eq!(failure.clone().map(|v| v), failure);
    }

    #[test]
    fn test_map_failure_rewrites_the_error() {
        let outcome: Outcome<i32> = Outcome::failure("original");
        let rewritten = outcome.map_failure(|_| "replaced".into());
        assert_eq!(rewritten.error().message, "replaced");
    }

    #[test]
    fn test_map_failure_leaves_success_alone() {
        let outcome = Outcome::success(1).map_failure(|_| "replaced".into());
        assert_eq!(outcome, Outcome::Success(1));
    }

    #[test]
    fn test_value_or() {
        assert_eq!(Outcome::success(5).value_or(0), 5);
        assert_eq!(Outcome::<i32>::failure("bad").value_or(0), 0);
    }

    #[test]
    fn test_error_or() {
        let error = Outcome::<i32>::failure("bad").error_or("default");
        assert_eq!(error.message, "bad");

        let fallback = Outcome::success(5).error_or("default");
        assert_eq!(fallback.message, "default");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::value()` on a `Failure`")]
    fn test_value_on_failure_panics() {
        let _ = Outcome::<i32>::failure("bad").value();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::error()` on a `Success`")]
    fn test_error_on_success_panics() {
        let _ = Outcome::success(5).error();
    }

    #[test]
    fn test_borrowed_views() {
        let success = Outcome::success(5);
        assert_eq!(success.as_success(), Some(&5));
        assert_eq!(success.as_failure(), None);

        let failure: Outcome<i32> = Outcome::failure("bad");
        assert_eq!(failure.as_success(), None);
        assert_eq!(failure.as_failure().map(|e| e.message.as_ref()), Some("bad"));
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Outcome<i32> = Ok(3).into();
        assert_eq!(ok, Outcome::Success(3));
        assert_eq!(ok.into_result(), Ok(3));

        let err: Outcome<i32> = Err(ValidationError::custom("bad")).into();
        assert!(err.into_result().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::success(5).to_string(), "Success(5)");
        let failure: Outcome<i32> = Outcome::failure("too big");
        assert_eq!(failure.to_string(), "Failure(too big)");
    }
}
