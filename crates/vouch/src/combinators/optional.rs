//! OPTIONAL combinator - validates Option types
//!
//! Absent input passes; present input is delegated to the inner validator.

use crate::foundation::{Validate, ValidationError};

/// Makes a validator accept `Option` input, passing on `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
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

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::minimum;

    #[test]
    fn test_none_passes() {
        let validator = minimum(0).optional();
        assert!(validator.validate(&None).is_ok());
    }

    #[test]
    fn test_some_valid() {
        let validator = optional(minimum(0));
        assert!(validator.validate(&Some(5)).is_ok());
    }

    #[test]
    fn test_some_invalid() {
        let validator = optional(minimum(0));
        let error = validator.validate(&Some(-1)).unwrap_err();
        assert_eq!(error.message, "Value must be at least 0");
    }
}
