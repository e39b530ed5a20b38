//! Membership validators

use std::collections::{BTreeSet, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a value is one of an allowed set.
///
/// The allowed values are kept ordered so the failure message is
/// deterministic.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::validators::one_of;
/// use vouch::foundation::Validate;
///
/// let validator = one_of(["red", "green", "blue"]);
/// assert!(validator.validate(&"red").is_ok());
/// assert!(validator.validate(&"purple").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    allowed: BTreeSet<T>,
}

impl<T: Ord + Display> OneOf<T> {
    /// Creates a validator from the allowed values.
    pub fn new(allowed: impl IntoIterator<Item = T>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl<T: Ord + Display> Validate for OneOf<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.allowed.contains(input) {
            Ok(())
        } else {
            let allowed = self
                .allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Err(
                ValidationError::new("one_of", format!("Value must be one of: {allowed}"))
                    .with_param("actual", input.to_string()),
            )
        }
    }
}

/// Creates a validator from the allowed values.
pub fn one_of<T: Ord + Display>(allowed: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(allowed)
}

// ============================================================================
// UNIQUE
// ============================================================================

/// Validates that all items in a slice are distinct.
#[derive(Debug, Clone, Copy)]
pub struct Unique<T> {
    _marker: PhantomData<fn(&T)>,
}

impl<T> Unique<T> {
    /// Creates a uniqueness validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Unique<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Validate for Unique<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(input.len());
        for item in input {
            if !seen.insert(item) {
                return Err(ValidationError::new("unique", "All items must be unique"));
            }
        }
        Ok(())
    }
}

/// Creates a uniqueness validator.
#[must_use]
pub fn unique<T: Eq + Hash>() -> Unique<T> {
    Unique::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::outcome::Outcome;

    #[test]
    fn test_one_of_accepts_member() {
        let validator = one_of([1, 2, 3]);
        assert!(validator.validate(&2).is_ok());
    }

    #[test]
    fn test_one_of_rejects_non_member() {
        let validator = one_of([1, 2, 3]);
        let error = validator.validate(&7).unwrap_err();
        assert_eq!(error.message, "Value must be one of: 1, 2, 3");
        assert_eq!(error.param("actual"), Some("7"));
    }

    #[test]
    fn test_one_of_message_is_deterministic() {
        // Insertion order does not leak into the message.
        let validator = one_of(["zebra", "ant", "mole"]);
        let error = validator.validate(&"fox").unwrap_err();
        assert_eq!(error.message, "Value must be one of: ant, mole, zebra");
    }

    #[test]
    fn test_unique_accepts_distinct_items() {
        let validator = unique::<i32>();
        assert!(validator.validate(&[1, 2, 3]).is_ok());
        assert!(validator.validate(&[]).is_ok());
    }

    #[test]
    fn test_unique_rejects_duplicates() {
        let validator = unique::<i32>();
        let error = validator.validate(&[1, 2, 1]).unwrap_err();
        assert_eq!(error.message, "All items must be unique");
    }

    #[test]
    fn test_unique_applies_to_owned_vectors() {
        let validator = unique::<i32>();
        let outcome = validator.apply(vec![1, 2, 3]);
        assert_eq!(outcome, Outcome::Success(vec![1, 2, 3]));
    }
}
