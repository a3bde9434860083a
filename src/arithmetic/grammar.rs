//! Precedence levels of the arithmetic grammar.
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | 0     | `+` `-`   | left          |
//! | 1     | `*` `/`   | left          |
//! | 2     | unary `-` | prefix        |
//! | 3     | `^`       | right         |
//! | 4     | integer   | atom          |
//! | 5     | `( .. )`  | reenters 0    |

use chumsky::BoxedParser;
use chumsky::Error as _;
use chumsky::prelude::*;

use super::ast::{BinaryOp, Expr};
use super::tokenizer::Token;
use crate::combinators::{left_associative_op, or_next, parenthesized, prefix, right_associative};
use crate::error::{ParseError, Span};
use crate::levels::levels_with_default;

/// Parser for one arithmetic expression, without an end-of-input check.
#[must_use]
pub fn expression<'a>() -> BoxedParser<'a, Token, Expr, ParseError<Token>> {
    levels_with_default([
        left_associative_op(
            operator(Token::Plus, BinaryOp::Addition)
                .or(operator(Token::Minus, BinaryOp::Subtraction)),
            combine,
        ),
        left_associative_op(
            operator(Token::Star, BinaryOp::Multiplication)
                .or(operator(Token::Slash, BinaryOp::Division)),
            combine,
        ),
        prefix(just(Token::Minus), |_, operand| Expr::Negation(Box::new(operand))),
        right_associative(just(Token::Caret), |base, exponent| {
            Expr::binary(BinaryOp::Exponentiation, base, exponent)
        }),
        or_next(number()),
        parenthesized(just(Token::LParen), just(Token::RParen)),
    ])
}

fn operator(
    token: Token,
    op: BinaryOp,
) -> impl Parser<Token, BinaryOp, Error = ParseError<Token>> + Clone {
    just(token).to(op)
}

fn combine(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

fn number() -> impl Parser<Token, Expr, Error = ParseError<Token>> + Clone {
    filter_map(|span: Span, token: Token| match token {
        Token::Number(n) => Ok(Expr::Number(n)),
        other => Err(ParseError::expected_input_found(span, None, Some(other))),
    })
}
