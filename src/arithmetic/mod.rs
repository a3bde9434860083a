//! Arithmetic expressions built from composed precedence levels.
//!
//! The grammar shows the level engine on a small language: integer
//! literals, `+ - * /`, right-associative `^`, unary minus and parentheses.
//! [`tokenize`] lexes the source, [`expression`] is the composed parser and
//! [`parse_expression`] ties the two together.

mod ast;
mod grammar;
mod tokenizer;

pub use ast::{BinaryOp, EvalError, Expr};
pub use grammar::expression;
pub use tokenizer::{Token, tokenize};

use chumsky::Stream;
use chumsky::prelude::*;

use crate::error::ParseError;

/// Parse a complete arithmetic expression.
///
/// # Examples
///
/// ```rust
/// use stratum::arithmetic::parse_expression;
///
/// let expr = parse_expression("1 + 2 * 3").unwrap_or_else(|errs| panic!("{errs:?}"));
/// assert_eq!(expr.to_sexpr(), "(+ 1 (* 2 3))");
/// assert_eq!(expr.evaluate(), Ok(7));
/// ```
///
/// # Errors
/// Returns the parse errors when `src` is not a single well-formed
/// expression. When no level matches at the failing position the error
/// reason is [`ErrorReason::NoViableAlternative`](crate::ErrorReason::NoViableAlternative).
#[must_use = "discarding the Result will ignore parse errors"]
pub fn parse_expression(src: &str) -> Result<Expr, Vec<ParseError<Token>>> {
    let tokens = tokenize(src);
    let eoi = src.len()..src.len();
    expression()
        .then_ignore(end())
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
}
