//! Combinators for building validators out of validators
//!
//! Each combinator closes over its operands and implements
//! [`Validate`](crate::foundation::Validate) itself, so a combined validator
//! is indistinguishable from a primitive one and composition nests freely.
//! No expression tree is materialized; the "tree" is the closure structure.
//!
//! The algebra and its error selection:
//!
//! - [`And`] — left first; a left failure short-circuits and surfaces
//! - [`Or`] — left first; a left success short-circuits; if both fail the
//!   right (last attempted) error surfaces
//! - [`Not`] — inverts, with a configurable failure message
//! - [`WithMessage`] — overrides the failure message or code
//! - [`Optional`] — `None` passes, `Some` delegates

pub mod and;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use message::{WithMessage, with_code, with_message};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, OrAny, or, or_any};
