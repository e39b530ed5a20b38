//! Closure-backed validators
//!
//! The lifts for arbitrary user functions: [`Predicate`] wraps a boolean
//! predicate with a failure message, [`FromFn`] wraps a full rule function
//! that builds its own error. Both produce ordinary validators that compose
//! with everything else.
//!
//! Validators are pure by contract. Nothing stops a caller from closing over
//! state (a "seen values" set, a call counter); the engine never requires it.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PREDICATE
// ============================================================================

/// Validates with a boolean predicate and a fixed failure message.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::validators::predicate;
/// use vouch::foundation::Validate;
///
/// let is_even = predicate(|n: &i64| n % 2 == 0, "Value must be even");
/// assert!(is_even.validate(&4).is_ok());
/// assert!(is_even.validate(&3).is_err());
/// ```
#[derive(Clone)]
pub struct Predicate<F, T: ?Sized> {
    pred: F,
    message: Cow<'static, str>,
    _marker: PhantomData<fn(&T)>,
}

impl<F, T> Predicate<F, T>
where
    F: Fn(&T) -> bool,
    T: ?Sized,
{
    /// Creates a validator from a predicate and the message reported when the
    /// predicate returns false.
    pub fn new(pred: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            pred,
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> Validate for Predicate<F, T>
where
    F: Fn(&T) -> bool,
    T: ?Sized,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.pred)(input) {
            Ok(())
        } else {
            Err(ValidationError::new("predicate", self.message.clone()))
        }
    }
}

/// Creates a validator from a predicate and a failure message.
pub fn predicate<F, T>(pred: F, message: impl Into<Cow<'static, str>>) -> Predicate<F, T>
where
    F: Fn(&T) -> bool,
    T: ?Sized,
{
    Predicate::new(pred, message)
}

// ============================================================================
// FROM FN
// ============================================================================

/// Wraps a plain rule function as a validator.
///
/// Use this when the rule needs to build its own structured error; for a
/// fixed message, [`predicate`] is shorter.
#[derive(Clone)]
pub struct FromFn<F, T: ?Sized> {
    func: F,
    _marker: PhantomData<fn(&T)>,
}

impl<F, T> Validate for FromFn<F, T>
where
    F: Fn(&T) -> Result<(), ValidationError>,
    T: ?Sized,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (self.func)(input)
    }
}

/// Wraps a plain rule function as a validator.
pub fn from_fn<F, T>(func: F) -> FromFn<F, T>
where
    F: Fn(&T) -> Result<(), ValidationError>,
    T: ?Sized,
{
    FromFn {
        func,
        _marker: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================
