//! Prelude module for convenient imports.
//!
//! A single `use vouch::prelude::*;` brings in the outcome type (with its
//! variants for pattern matching), the core traits, all built-in validators,
//! the combinators, and the parsers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! match username.apply("alice") {
//!     Success(name) => println!("welcome, {name}"),
//!     Failure(error) => eprintln!("{error}"),
//! }
//! ```

// ============================================================================
// OUTCOME: The result algebra
// ============================================================================

pub use crate::outcome::Outcome;
pub use crate::outcome::Outcome::{Failure, Success};

// ============================================================================
// FOUNDATION: Core traits, errors, aggregation
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, validate_with_all, validate_with_any,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AndAll, Not, Optional, Or, OrAny, WithMessage, and, and_all, not, optional, or, or_any,
    with_code, with_message,
};

// ============================================================================
// PARSING: Parsers and the adapter boundary
// ============================================================================

pub use crate::parsing::{
    create_parser, create_parser_with, from_str, parse_bool, parse_float, parse_int,
    with_validation,
};

#[cfg(feature = "serde")]
pub use crate::parsing::parse_json;
#[cfg(feature = "network")]
pub use crate::parsing::{parse_ip, parse_ipv4, parse_ipv6, parse_url};
#[cfg(feature = "temporal")]
pub use crate::parsing::{parse_date, parse_date_with_format, parse_uuid};
