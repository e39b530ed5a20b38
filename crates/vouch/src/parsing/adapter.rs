//! The boundary between fallible conversions and Outcome-returning parsers
//!
//! User-supplied conversion functions report errors through `Result`; the
//! adapter captures them here and turns them into `Failure` values, so no
//! conversion error ever propagates past this boundary by another channel.

use std::borrow::{Borrow, Cow};
use std::fmt::Display;
use std::str::FromStr;

use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::outcome::Outcome;

/// Wraps a fallible conversion function into an Outcome-returning parser.
///
/// The conversion's error becomes the failure message (code `parse_error`).
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::parsing::create_parser;
///
/// let parse_port = create_parser(|s: &str| s.parse::<u16>());
/// assert!(parse_port("8080").is_success());
/// assert!(parse_port("99999").is_failure());
/// ```
pub fn create_parser<T, E, F>(convert: F) -> impl Fn(&str) -> Outcome<T>
where
    F: Fn(&str) -> Result<T, E>,
    E: Display,
{
    move |input| match convert(input) {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(ValidationError::new("parse_error", error.to_string())),
    }
}

/// Like [`create_parser`], but failures carry a fixed custom message.
pub fn create_parser_with<T, E, F>(
    convert: F,
    message: impl Into<Cow<'static, str>>,
) -> impl Fn(&str) -> Outcome<T>
where
    F: Fn(&str) -> Result<T, E>,
{
    let message = message.into();
    move |input| match convert(input) {
        Ok(value) => Outcome::Success(value),
        Err(_) => Outcome::Failure(ValidationError::new("parse_error", message.clone())),
    }
}

/// Parses any [`FromStr`] type, trimming surrounding whitespace first.
pub fn from_str<T>(input: &str) -> Outcome<T>
where
    T: FromStr,
    T::Err: Display,
{
    match input.trim().parse::<T>() {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(ValidationError::new("parse_error", error.to_string())),
    }
}

/// Fuses a parser with a validator.
///
/// The combined function parses, then pipes the parsed value through the
/// validator via `bind`. To any caller it is just another
/// `Fn(&str) -> Outcome<T>`; a parse failure surfaces as-is and the
/// validator never runs on it.
pub fn with_validation<T, P, V>(parser: P, validator: V) -> impl Fn(&str) -> Outcome<T>
where
    P: Fn(&str) -> Outcome<T>,
    V: Validate,
    T: Borrow<V::Input>,
{
    move |input| parser(input).bind(|value| validator.apply(value))
}

// ============================================================================
// TESTS
// ============================================================================
