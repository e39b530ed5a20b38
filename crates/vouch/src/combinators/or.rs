//! OR combinator - logical disjunction of validators
//!
//! At least one validator must pass. The left operand is evaluated first and
//! its success short-circuits: the right operand is never invoked. If both
//! fail, the error surfaced is the right (last attempted) validator's error,
//! verbatim — first success wins, last failure wins. Downstream message
//! expectations depend on that asymmetry.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// let validator = maximum(0).or(minimum(100));
/// assert!(validator.apply(-5).is_success());   // left passes
/// assert!(validator.apply(150).is_success());  // right passes
///
/// // Both fail: the last attempted error surfaces.
/// assert_eq!(validator.apply(50).error().message, "Value must be at least 100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            // The left error is dropped: whatever the second attempt returns
            // is the result, success or failure.
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Tries a dynamic number of validators until one passes.
///
/// Validators run in order; the first success returns immediately. If all
/// fail, the last attempted validator's error is surfaced.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut last_error = None;

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ValidationError::new("or_any_empty", "No alternatives to try")
        }))
    }
}

/// Creates an `OrAny` combinator from a vector of validators.
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}
