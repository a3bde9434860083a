//! Helpers shared by unit tests.
//!
//! Character-level grammars keep engine tests independent of the arithmetic
//! tokenizer, while the [`Expr`] constructors reduce boilerplate in
//! arithmetic assertions.

use chumsky::BoxedParser;
use chumsky::prelude::*;

use crate::ParseError;
use crate::arithmetic::{BinaryOp, Expr};

/// Composed grammar over characters that renders its result as text.
pub type CharParser = BoxedParser<'static, char, String, ParseError<char>>;

/// Parser for a single decimal digit.
#[must_use]
pub fn digit() -> impl Parser<char, String, Error = ParseError<char>> + Clone {
    filter(char::is_ascii_digit).map(String::from)
}

/// Combining function that brackets `lhs symbol rhs`, so `grouped('+')`
/// turns `"1"` and `"2"` into `"(1+2)"`.
#[must_use]
pub fn grouped(symbol: char) -> impl Fn(String, String) -> String + Clone + 'static {
    move |lhs, rhs| format!("({lhs}{symbol}{rhs})")
}

/// Run `parser` over `src`, requiring the whole input to be consumed.
///
/// # Errors
/// Returns the parser's errors when `src` is not accepted.
pub fn parse_chars(parser: &CharParser, src: &str) -> Result<String, Vec<ParseError<char>>> {
    parser.clone().then_ignore(end()).parse(src)
}

/// Construct an [`Expr::Number`].
#[must_use]
pub fn num(n: i64) -> Expr {
    Expr::Number(n)
}

/// Construct an [`Expr::Binary`].
#[must_use]
pub fn bin(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// Construct an [`Expr::Negation`].
#[must_use]
pub fn neg(operand: Expr) -> Expr {
    Expr::Negation(Box::new(operand))
}
