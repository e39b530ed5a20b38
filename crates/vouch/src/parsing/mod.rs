//! String parsers and the parser-adapter boundary
//!
//! A parser is any function `&str -> Outcome<T>`. The adapter functions in
//! [`adapter`] build one from an arbitrary fallible conversion, and
//! [`with_validation`](adapter::with_validation) fuses a parser with a
//! validator so the pair is indistinguishable from a primitive parser.
//!
//! Every concrete parser here is a pure, single-step transform with exactly
//! two terminal outcomes; rejects empty or whitespace-only input up front;
//! and trims surrounding whitespace before converting.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! assert_eq!(parse_int("42"), Outcome::Success(42));
//! assert!(parse_int("abc").is_failure());
//!
//! let age = with_validation(parse_int, minimum(0).and(maximum(120)));
//! assert_eq!(age("35"), Outcome::Success(35));
//! ```

pub mod adapter;
pub mod primitives;

#[cfg(feature = "serde")]
pub mod json;
#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "temporal")]
pub mod temporal;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use adapter::{create_parser, create_parser_with, from_str, with_validation};
pub use primitives::{parse_bool, parse_float, parse_int};

#[cfg(feature = "serde")]
pub use json::parse_json;
#[cfg(feature = "network")]
pub use network::{parse_ip, parse_ipv4, parse_ipv6, parse_url};
#[cfg(feature = "temporal")]
pub use temporal::{parse_date, parse_date_with_format, parse_uuid};

pub(crate) const EMPTY_INPUT: &str = "Input must not be empty";

/// Shared guard for blank input.
pub(crate) fn reject_blank(input: &str) -> Result<&str, crate::foundation::ValidationError> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        Err(crate::foundation::ValidationError::new(
            "empty_input",
            EMPTY_INPUT,
        ))
    } else {
        Ok(cleaned)
    }
}
