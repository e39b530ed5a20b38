//! NOT combinator - logical negation of validators
//!
//! Inverts a validator: success becomes failure and failure becomes success.
//! When the inner validator fails, the negation succeeds with the original
//! input value — a failed validator's output is never trusted. When the
//! inner validator succeeds, the negation fails with a configurable message.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

const DEFAULT_MESSAGE: &str = "Negated validation failed";

/// Inverts a validator with logical NOT.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// let reserved = one_of(["admin", "root"]);
/// let username = reserved.not_with_message("That name is reserved");
///
/// assert!(username.apply("alice").is_success());
/// assert_eq!(username.apply("admin").error().message, "That name is reserved");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
    message: Cow<'static, str>,
}

impl<V> Not<V> {
    /// Creates a `Not` combinator with the default failure message.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            message: Cow::Borrowed(DEFAULT_MESSAGE),
        }
    }

    /// Creates a `Not` combinator that fails with `message` when the inner
    /// validator succeeds.
    pub fn with_message(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new("not_failed", self.message.clone())),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator with the default failure message.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
