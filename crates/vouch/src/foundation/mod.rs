//! Core validation types and traits
//!
//! This module contains the building blocks of the engine:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Aggregation**: [`validate_with_all`], [`validate_with_any`]
//!
//! Validators are generic over their input type and compose through the
//! combinators in [`crate::combinators`]; the composed value is always
//! another validator, so composition is closed.

// Module declarations
pub mod error;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// AGGREGATING VALIDATION
// ============================================================================

/// Validates a value with multiple validators, collecting every failure.
///
/// Unlike `and`, which stops at the first failure, this runs all validators
/// and reports each error. It is the mode schema and collection consumers
/// use to show a complete list of problems at once.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::foundation::validate_with_all;
///
/// let errors = validate_with_all(&5, &[&minimum(10), &maximum(0)]).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.has_errors() { Err(errors) } else { Ok(()) }
}

/// Validates a value with multiple validators; at least one must pass.
///
/// Returns on the first success. If every validator fails, the collected
/// errors are returned.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validate_with_all_success() {
        let result = validate_with_all("test", &[&AlwaysValid, &AlwaysValid]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_with_all_collects_every_failure() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid, &fails];
        let errors = validate_with_all("test", validators).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validate_with_any_success() {
        let valid = AlwaysValid;
        let fails = AlwaysFails;
        let validators: &[&dyn Validate<Input = str>] = &[&fails, &valid];
        assert!(validate_with_any("test", validators).is_ok());
    }

    #[test]
    fn test_validate_with_any_all_fail() {
        let result = validate_with_any("test", &[&AlwaysFails, &AlwaysFails]);
        assert!(result.is_err());
    }
}
