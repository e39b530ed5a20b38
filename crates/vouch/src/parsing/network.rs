//! Network address parsers

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use url::Url;

use crate::foundation::ValidationError;
use crate::outcome::Outcome;
use crate::parsing::reject_blank;

/// Parses a string to an IPv4 address.
pub fn parse_ipv4(input: &str) -> Outcome<Ipv4Addr> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match cleaned.parse::<Ipv4Addr>() {
        Ok(addr) => Outcome::Success(addr),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid IPv4 address",
        )),
    }
}

/// Parses a string to an IPv6 address.
pub fn parse_ipv6(input: &str) -> Outcome<Ipv6Addr> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match cleaned.parse::<Ipv6Addr>() {
        Ok(addr) => Outcome::Success(addr),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid IPv6 address",
        )),
    }
}

/// Parses a string to an IP address of either family.
pub fn parse_ip(input: &str) -> Outcome<IpAddr> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match cleaned.parse::<IpAddr>() {
        Ok(addr) => Outcome::Success(addr),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid IP address",
        )),
    }
}

/// Parses a string to an absolute URL.
pub fn parse_url(input: &str) -> Outcome<Url> {
    let cleaned = match reject_blank(input) {
        Ok(cleaned) => cleaned,
        Err(error) => return Outcome::Failure(error),
    };

    match Url::parse(cleaned) {
        Ok(parsed) => Outcome::Success(parsed),
        Err(_) => Outcome::Failure(ValidationError::new(
            "parse_error",
            "Input must be a valid URL",
        )),
    }
}

// ============================================================================
// TESTS
// ============================================================================
