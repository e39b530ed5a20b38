//! # vouch
//!
//! Composable input parsing and validation without exceptions.
//!
//! Untrusted strings become typed values through parsers, typed values are
//! checked against rules by validators, and both steps chain through one
//! [`Outcome`](outcome::Outcome) type: a failure anywhere short-circuits the
//! rest of the chain and carries its error to the end untouched.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! // Parse, then refine, in one chain
//! let age = parse_int("42").bind(|n| minimum(0).and(maximum(120)).apply(n));
//! assert_eq!(age, Outcome::Success(42));
//!
//! // Compose validators with .and() / .or() / .not()
//! let username = min_length(3).and(max_length(20));
//! assert!(username.apply("alice").is_success());
//! ```
//!
//! ## Creating Validators
//!
//! Use [`predicate`](validators::predicate) for one-off rules, the
//! [`validator!`] macro for zero-boilerplate named validators, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Numeric**: [`Minimum`](validators::Minimum),
//!   [`Maximum`](validators::Maximum), [`Between`](validators::Between)
//! - **String**: [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`NotEmpty`](validators::NotEmpty),
//!   [`MatchesRegex`](validators::MatchesRegex)
//! - **Membership**: [`OneOf`](validators::OneOf), [`Unique`](validators::Unique)

// ValidationError is the payload of every Failure; boxing it would add an
// allocation and an indirection to every validation result.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod outcome;
pub mod parsing;
pub mod prelude;
pub mod validators;
