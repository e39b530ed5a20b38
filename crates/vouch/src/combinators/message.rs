//! MESSAGE combinator - custom error messages
//!
//! Replaces the message (and optionally the code) of a validator's failure,
//! keeping the original error nested for diagnostics. This is how callers
//! attach user-facing wording to a built-in rule.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::prelude::*;
///
/// let password = min_length(8).with_message("Password must be at least 8 characters");
/// let error = password.apply("short").error();
/// assert_eq!(error.message, "Password must be at least 8 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a combinator with a custom failure message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Creates a combinator that only overrides the error code, keeping the
    /// original message.
    pub fn code_only(inner: V, code: impl Into<String>) -> Self {
        Self {
            inner,
            message: String::new(),
            code: Some(code.into()),
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
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

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            let message = if self.message.is_empty() {
                original.message.clone()
            } else {
                Cow::Owned(self.message.clone())
            };

            ValidationError::new(code, message).with_nested_error(original)
        })
    }
}

/// Creates a combinator with a custom failure message.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

/// Creates a combinator that overrides only the error code.
pub fn with_code<V>(validator: V, code: impl Into<String>) -> WithMessage<V> {
    WithMessage::code_only(validator, code)
}
