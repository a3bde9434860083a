//! Shared test utilities for integration tests.
//!
//! These helpers construct arithmetic AST nodes and assert over parser
//! errors. They mirror a subset of `stratum::test_util` without requiring the
//! `test-support` feature.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use std::fmt::Debug;

use chumsky::BoxedParser;
use chumsky::prelude::*;
use stratum::ParseError;
use stratum::arithmetic::{BinaryOp, Expr, parse_expression};

/// Construct an [`Expr::Number`].
#[must_use]
pub fn num(n: i64) -> Expr {
    Expr::Number(n)
}

/// Construct an [`Expr::Negation`].
#[must_use]
pub fn neg(operand: Expr) -> Expr {
    Expr::Negation(Box::new(operand))
}

#[must_use]
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Addition, lhs, rhs)
}

#[must_use]
pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Subtraction, lhs, rhs)
}

#[must_use]
pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Multiplication, lhs, rhs)
}

#[must_use]
pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Division, lhs, rhs)
}

#[must_use]
pub fn pow(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Exponentiation, lhs, rhs)
}

/// Parse `src` with the arithmetic grammar, panicking with the errors on
/// failure.
#[must_use]
pub fn parse_ok(src: &str) -> Expr {
    parse_expression(src).unwrap_or_else(|errs| panic!("source {src:?} errors: {errs:?}"))
}

/// Run a character-level grammar over the whole of `src`.
///
/// # Errors
/// Returns the parser's errors when `src` is not accepted.
pub fn parse_whole<O>(
    parser: &BoxedParser<'static, char, O, ParseError<char>>,
    src: &str,
) -> Result<O, Vec<ParseError<char>>> {
    parser.clone().then_ignore(end()).parse(src)
}

/// Assert that a parse failed and that the bottom parser's diagnostic was
/// reported.
///
/// # Panics
/// Panics if `result` is `Ok` or no error carries the bottom diagnostic.
pub fn assert_no_viable_alternative<O: Debug, I: Debug>(
    src: &str,
    result: Result<O, Vec<ParseError<I>>>,
) {
    match result {
        Ok(out) => panic!("expected {src:?} to fail, parsed {out:?}"),
        Err(errs) => assert!(
            errs.iter().any(ParseError::is_no_viable_alternative),
            "expected bottom diagnostic for {src:?}, got {errs:?}"
        ),
    }
}
