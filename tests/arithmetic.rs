//! Behavioural tests for the arithmetic grammar.
//!
//! The grammar is composed from precedence levels, so these cases exercise
//! level ordering, associativity and the parenthesis level that reenters the
//! top of the grammar.

mod test_util;

use chumsky::BoxedParser;
use chumsky::Stream;
use chumsky::prelude::*;
use rstest::{fixture, rstest};
use stratum::arithmetic::{EvalError, Expr, Token, expression, parse_expression, tokenize};
use stratum::{NO_VIABLE_ALTERNATIVE, ParseError};
use test_util::{add, assert_no_viable_alternative, div, mul, neg, num, parse_ok, pow, sub};

#[rstest]
#[case("42", num(42))]
#[case("1 + 2 * 3", add(num(1), mul(num(2), num(3))))]
#[case("1 * 2 + 3", add(mul(num(1), num(2)), num(3)))]
#[case("(1 * 2) ^ 3", pow(mul(num(1), num(2)), num(3)))]
#[case("1 ^ 2 ^ 3", pow(num(1), pow(num(2), num(3))))]
#[case("1 * 2 ^ 3", mul(num(1), pow(num(2), num(3))))]
#[case("8 - 4 - 2", sub(sub(num(8), num(4)), num(2)))]
#[case("8 - 4 + 2", add(sub(num(8), num(4)), num(2)))]
#[case("8 / 4 * 2", mul(div(num(8), num(4)), num(2)))]
#[case("-3", neg(num(3)))]
#[case("--3", neg(neg(num(3))))]
#[case("-2 ^ 2", neg(pow(num(2), num(2))))]
#[case("1 - -2", sub(num(1), neg(num(2))))]
#[case("((5))", num(5))]
#[case("2 * (3 + 4)", mul(num(2), add(num(3), num(4))))]
#[case("(1 + 2) * (3 - 4)", mul(add(num(1), num(2)), sub(num(3), num(4))))]
#[case("2 ^ (1 + 1) ^ 3", pow(num(2), pow(add(num(1), num(1)), num(3))))]
fn parses_precedence_and_associativity(#[case] src: &str, #[case] expected: Expr) {
    assert_eq!(parse_ok(src), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(")")]
#[case("*")]
#[case("$")]
#[case("^ 2")]
fn total_mismatch_reaches_bottom(#[case] src: &str) {
    assert_no_viable_alternative(src, parse_expression(src));
}

#[rstest]
#[case("1 +")]
#[case("(1")]
#[case("1 2")]
#[case("()")]
#[case("2 ^ -1")]
#[case("1 + $")]
fn rejects_malformed_expressions(#[case] src: &str) {
    assert!(parse_expression(src).is_err(), "{src:?} should not parse");
}

#[test]
fn bottom_diagnostic_renders_fixed_message() {
    let Err(errs) = parse_expression("") else {
        panic!("empty input should not parse");
    };
    assert!(
        errs.iter().any(|err| err.to_string().contains(NO_VIABLE_ALTERNATIVE)),
        "{errs:?}"
    );
}

#[fixture]
fn grammar() -> BoxedParser<'static, Token, Expr, ParseError<Token>> {
    expression()
}

#[rstest]
#[case("1 + 2 * 3")]
#[case("(4 ^ 2) - -1")]
#[case("1 +")]
fn one_parser_gives_identical_results(
    grammar: BoxedParser<'static, Token, Expr, ParseError<Token>>,
    #[case] src: &str,
) {
    let run = || {
        let eoi = src.len()..src.len();
        grammar
            .clone()
            .then_ignore(end())
            .parse(Stream::from_iter(eoi, tokenize(src).into_iter()))
    };
    assert_eq!(run(), run());
}

#[rstest]
#[case("1 + 2 * 3", 7)]
#[case("2 ^ 3 ^ 2", 512)]
#[case("(2 ^ 3) ^ 2", 64)]
#[case("7 - 2 - 1", 4)]
#[case("-(3 - 10) / 2", 3)]
fn evaluates_parsed_expressions(#[case] src: &str, #[case] expected: i64) {
    assert_eq!(parse_ok(src).evaluate(), Ok(expected));
}

#[rstest]
#[case("1 / (2 - 2)", EvalError::DivisionByZero)]
#[case("9223372036854775807 + 1", EvalError::Overflow)]
fn surfaces_evaluation_errors(#[case] src: &str, #[case] expected: EvalError) {
    assert_eq!(parse_ok(src).evaluate(), Err(expected));
}
