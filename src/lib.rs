//! Library crate for stratum.
//!
//! Builds expression parsers out of independently defined precedence
//! levels instead of hand-written, mutually recursive grammar rules. Levels
//! are listed loosest-binding first and composed with [`levels`] on top of
//! the `chumsky` combinators. The [`arithmetic`] module is a worked example.

#![forbid(unsafe_code)]

pub mod arithmetic;
pub mod combinators;
pub mod error;
pub mod level;
pub mod levels;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use combinators::{
    left_associative, left_associative_op, or_next, parenthesized, prefix, right_associative,
    right_associative_op,
};
pub use error::{ErrorReason, NO_VIABLE_ALTERNATIVE, ParseError, Span};
pub use level::Level;
pub use levels::{levels, levels_with_default, no_viable_alternative};
