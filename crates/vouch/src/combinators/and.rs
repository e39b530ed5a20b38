//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed. The left
//! operand is evaluated first and its failure short-circuits: the right
//! operand is never invoked and the left error is the one surfaced. Chains
//! like `a.and(b).and(c)` fold left, applying the same rule pairwise.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Left-to-right evaluation order and left-error precedence are observable
/// contract: with `a` failing with `"M_A"` and `b` failing with `"M_B"`,
/// `a.and(b)` fails with `"M_A"` and never runs `b`.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// let age = minimum(0).and(maximum(120));
/// assert_eq!(age.apply(42), Outcome::Success(42));
/// assert_eq!(age.apply(-1).error().message, "Value must be at least 0");
/// assert_eq!(age.apply(200).error().message, "Value must be at most 120");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        // `?` is the short-circuit: a left failure returns before the right
        // validator is ever invoked, and both see the same input value.
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Combines a dynamic number of validators with logical AND.
///
/// All validators must pass. Evaluation stops at the first failure and that
/// failure is the one surfaced.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

/// Creates an `AndAll` combinator from a vector of validators.
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::outcome::Outcome;

    struct Minimum {
        min: i64,
    }

    impl Validate for Minimum {
        type Input = i64;
        fn validate(&self, input: &i64) -> Result<(), ValidationError> {
            if *input >= self.min {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "minimum",
                    format!("Value must be at least {}", self.min),
                ))
            }
        }
    }

    struct Maximum {
        max: i64,
    }

    impl Validate for Maximum {
        type Input = i64;
        fn validate(&self, input: &i64) -> Result<(), ValidationError> {
            if *input <= self.max {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "maximum",
                    format!("Value must be at most {}", self.max),
                ))
            }
        }
    }

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(Minimum { min: 0 }, Maximum { max: 120 });
        assert_eq!(validator.apply(42), Outcome::Success(42));
    }

    #[test]
    fn test_and_left_error_surfaces() {
        let validator = And::new(Minimum { min: 0 }, Maximum { max: 120 });
        let error = validator.apply(-1).error();
        assert_eq!(error.message, "Value must be at least 0");
    }

    #[test]
    fn test_and_right_error_surfaces_when_left_passes() {
        let validator = And::new(Minimum { min: 0 }, Maximum { max: 120 });
        let error = validator.apply(200).error();
        assert_eq!(error.message, "Value must be at most 120");
    }

    #[test]
    fn test_and_chain_folds_left() {
        let validator = Minimum { min: 0 }
            .and(Maximum { max: 120 })
            .and(Minimum { min: 18 });
        assert!(validator.apply(42).is_success());
        assert_eq!(validator.apply(5).error().code, "minimum");
    }

    #[test]
    fn test_and_all_stops_at_first_failure() {
        let validators = vec![
            Minimum { min: 0 },
            Minimum { min: 10 },
            Minimum { min: 100 },
        ];
        let combined = and_all(validators);
        assert!(combined.validate(&200).is_ok());

        let error = combined.validate(&5).unwrap_err();
        assert_eq!(error.message, "Value must be at least 10");
    }
}
