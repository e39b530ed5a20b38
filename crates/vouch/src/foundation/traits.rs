//! Core traits for the validation engine
//!
//! [`Validate`] is the rule contract every validator implements; [`ValidateExt`]
//! is the blanket extension that turns any rule into a value-carrying
//! validator function and supplies the composition methods. Every combinator
//! returns a type that implements [`Validate`] again, so a combined validator
//! is indistinguishable from a primitive one.

use std::borrow::{Borrow, Cow};

use crate::foundation::ValidationError;
use crate::outcome::Outcome;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator checks a borrowed input against one rule and reports the
/// failure as a structured [`ValidationError`]. It holds no mutable state and
/// performs no I/O; given the same input it always returns the same result.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Value must be even"))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` types like `str` and `[T]` to validate borrowed views.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the rule holds
    /// * `Err(ValidationError)` if it does not
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing the value-carrying view and the combinators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// let age = minimum(0).and(maximum(120));
/// assert_eq!(age.apply(42), Outcome::Success(42));
/// assert!(age.apply(200).is_failure());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Applies the validator to an owned value, carrying it through.
    ///
    /// On success the **original value** is returned inside the outcome —
    /// a validator checks, it never transforms. This is the fusion point with
    /// parsers: `parse_int(s).bind(|n| minimum(0).apply(n))`.
    fn apply<T>(&self, value: T) -> Outcome<T>
    where
        T: Borrow<Self::Input>,
    {
        match self.validate(value.borrow()) {
            Ok(()) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Combines two validators with logical AND.
    ///
    /// The left validator runs first; its failure short-circuits (the right
    /// validator is never invoked) and its error is the one surfaced. The
    /// short-circuit is contract, not optimization: the right operand may be
    /// expensive or deliberately side-effecting.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// The left validator runs first; its success short-circuits. If both
    /// fail, the error surfaced is the right (last attempted) validator's,
    /// verbatim.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT, using the default message.
    ///
    /// ```rust,ignore
    /// let forbidden = one_of(["admin", "root"]);
    /// assert!(forbidden.not().apply("alice").is_success());
    /// ```
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Inverts the validator with logical NOT, failing with `message` when
    /// the inner validator succeeds.
    fn not_with_message(self, message: impl Into<Cow<'static, str>>) -> Not<Self> {
        Not::with_message(self, message)
    }

    /// Makes the validator accept `None` and delegate on `Some`.
    fn optional(self) -> Optional<Self>
    where
        Self::Input: Sized,
    {
        Optional::new(self)
    }

    /// Replaces the failure message, keeping the original error nested.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
