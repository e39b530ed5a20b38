//! Built-in validators
//!
//! Ready-to-use rules for common validation scenarios. Every validator here
//! composes with every other through `and`/`or`/`not`, and lifts to a
//! value-carrying function via
//! [`ValidateExt::apply`](crate::foundation::ValidateExt::apply).
//!
//! # Categories
//!
//! - **Numeric**: [`Minimum`], [`Maximum`], [`Between`]
//! - **String**: [`MinLength`], [`MaxLength`], [`LengthRange`], [`NotEmpty`],
//!   [`MatchesRegex`]
//! - **Membership**: [`OneOf`], [`Unique`]
//! - **Custom**: [`Predicate`], [`FromFn`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! let age = minimum(0).and(maximum(120));
//! let username = min_length(3).and(max_length(20));
//! let rating = between(1, 10).with_message("Rating must be 1-10");
//! ```

// Numeric validators
pub mod range;

// String validators
pub mod length;
pub mod pattern;

// Membership validators
pub mod membership;

// Closure-backed validators
pub mod custom;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use range::{Between, Maximum, Minimum, between, maximum, minimum};

pub use length::{
    LengthMode, LengthRange, MaxLength, MinLength, NotEmpty, length_range, max_length, min_length,
    not_empty,
};

pub use pattern::{MatchesRegex, matches_regex};

pub use membership::{OneOf, Unique, one_of, unique};

pub use custom::{FromFn, Predicate, from_fn, predicate};
