//! Numeric range validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Minimum<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("minimum", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn minimum(min: T);
}

crate::validator! {
    /// Validates that a value is at most a maximum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Maximum<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("maximum", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn maximum(max: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Between<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::new(
            "between",
            format!("Value must be between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.to_string())
    }
    fn between(min: T, max: T);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};
    use crate::outcome::Outcome;

    #[test]
    fn test_minimum() {
        let validator = minimum(0);
        assert!(validator.validate(&0).is_ok());
        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&-1).is_err());
    }

    #[test]
    fn test_minimum_message() {
        let error = minimum(0).apply(-1).error();
        assert_eq!(error.message, "Value must be at least 0");
        assert_eq!(error.param("actual"), Some("-1"));
    }

    #[test]
    fn test_maximum() {
        let validator = maximum(100);
        assert!(validator.validate(&100).is_ok());
        assert!(validator.validate(&50).is_ok());
        assert!(validator.validate(&101).is_err());
    }

    #[test]
    fn test_maximum_message() {
        let error = maximum(120).apply(150).error();
        assert_eq!(error.message, "Value must be at most 120");
    }

    #[test]
    fn test_between_boundaries_included() {
        let validator = between(0, 100);
        assert!(validator.validate(&0).is_ok());
        assert!(validator.validate(&50).is_ok());
        assert!(validator.validate(&100).is_ok());
        assert!(validator.validate(&-1).is_err());
        assert!(validator.validate(&101).is_err());
    }

    #[test]
    fn test_between_message() {
        let error = between(1, 10).apply(11).error();
        assert_eq!(error.message, "Value must be between 1 and 10");
    }

    #[test]
    fn test_floats() {
        let validator = minimum(0.5_f64);
        assert!(validator.validate(&0.5).is_ok());
        assert!(validator.validate(&0.4).is_err());
    }

    #[test]
    fn test_apply_carries_the_value() {
        assert_eq!(minimum(0).apply(42), Outcome::Success(42));
    }
}
