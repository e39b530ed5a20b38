//! Combinator example for vouch

use vouch::prelude::*;

fn main() {
    // AND: both rules must hold; the first failure is reported
    let username = min_length(3).and(max_length(20));

    for name in ["alice", "ab", "a_very_long_username_indeed"] {
        match username.apply(name) {
            Success(name) => println!("'{name}' is a valid username"),
            Failure(error) => println!("'{name}' rejected: {error}"),
        }
    }

    println!();

    // OR: either rule may hold; if both fail, the last error is reported
    let port = maximum(1023_i64)
        .with_message("Reserved ports need no registration")
        .or(between(49152, 65535).with_message("Use an ephemeral port"));

    for candidate in [80_i64, 50000, 8080] {
        match port.apply(candidate) {
            Success(p) => println!("port {p} accepted"),
            Failure(error) => println!("port {candidate} rejected: {error}"),
        }
    }

    println!();

    // NOT: invert a rule, restoring the original input on success
    let reserved = one_of(["admin", "root", "system"]);
    let available = reserved.not_with_message("That name is reserved");

    for name in ["alice", "root"] {
        match available.apply(name) {
            Success(name) => println!("'{name}' is available"),
            Failure(error) => println!("'{name}': {error}"),
        }
    }
}
