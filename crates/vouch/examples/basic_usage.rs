//! Basic usage example for vouch

use vouch::prelude::*;

fn main() {
    // Parse untrusted strings into typed values
    for input in ["42", "42.0", "forty-two", ""] {
        match parse_int(input) {
            Success(n) => println!("parsed {input:?} as {n}"),
            Failure(error) => println!("rejected {input:?}: {error}"),
        }
    }

    println!();

    // Refine parsed values with validators, chained through bind
    let age_rules = minimum(0).and(maximum(120));
    for input in ["35", "-1", "200", "old"] {
        let outcome = parse_int(input).bind(|n| age_rules.apply(n));
        match outcome {
            Success(age) => println!("age {input:?} accepted: {age}"),
            Failure(error) => println!("age {input:?} rejected: {error}"),
        }
    }

    println!();

    // Extraction without pattern matching
    let fallback = parse_int("oops").value_or(0);
    println!("with a default: {fallback}");

    let message = parse_int("oops").error_or("no error").message;
    println!("error message: {message}");
}
