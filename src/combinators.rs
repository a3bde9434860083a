//! Ready-made level creators.
//!
//! - [`left_associative`] and [`right_associative`] build binary operator
//!   levels; the `_op` variants also hand the parsed operator to the combining
//!   function so one level can host several operators of equal precedence.
//! - [`prefix`] builds a unary prefix operator level.
//! - [`or_next`] and [`parenthesized`] build atomic levels that fall through
//!   to the next level when they do not match.
//!
//! None of these combinators use `top` except [`parenthesized`].

use std::rc::Rc;

use chumsky::prelude::*;

use crate::level::Level;

/// Level for a left-associative binary operator.
///
/// Parses `next (op next)*` and folds left to right, so `a op b op c` yields
/// `combine(combine(a, b), c)`. A lone operand is returned untouched.
#[must_use]
pub fn left_associative<'a, I, O, E, Op, P, F>(op: P, combine: F) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    Op: 'a,
    P: Parser<I, Op, Error = E> + Clone + 'a,
    F: Fn(O, O) -> O + 'a,
{
    left_associative_op(op, move |lhs, _: Op, rhs| combine(lhs, rhs))
}

/// As [`left_associative`], passing the parsed operator to `combine`.
#[must_use]
pub fn left_associative_op<'a, I, O, E, Op, P, F>(op: P, combine: F) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    Op: 'a,
    P: Parser<I, Op, Error = E> + Clone + 'a,
    F: Fn(O, Op, O) -> O + 'a,
{
    let combine = Rc::new(combine);
    Level::new(move |_top, next| {
        let combine = Rc::clone(&combine);
        next.clone()
            .then(op.clone().then(next).repeated())
            .foldl(move |lhs, (operator, rhs)| combine(lhs, operator, rhs))
            .boxed()
    })
}

/// Level for a right-associative binary operator.
///
/// Collects `next (op next)*` and reduces it from the right, so
/// `a op b op c` yields `combine(a, combine(b, c))`. A lone operand is
/// returned untouched.
#[must_use]
pub fn right_associative<'a, I, O, E, Op, P, F>(op: P, combine: F) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    Op: 'a,
    P: Parser<I, Op, Error = E> + Clone + 'a,
    F: Fn(O, O) -> O + 'a,
{
    right_associative_op(op, move |lhs, _: Op, rhs| combine(lhs, rhs))
}

/// As [`right_associative`], passing the parsed operator to `combine`.
#[must_use]
pub fn right_associative_op<'a, I, O, E, Op, P, F>(op: P, combine: F) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    Op: 'a,
    P: Parser<I, Op, Error = E> + Clone + 'a,
    F: Fn(O, Op, O) -> O + 'a,
{
    let combine = Rc::new(combine);
    Level::new(move |_top, next| {
        let combine = Rc::clone(&combine);
        next.clone()
            .then(op.clone().then(next).repeated())
            .map(move |(head, tail)| fold_right(head, tail, &*combine))
            .boxed()
    })
}

/// Reduce `head (op operand)*` from the right.
///
/// The sequence always holds at least `head`, so no seed value is needed and
/// a single operand is returned without calling `combine`.
fn fold_right<O, Op>(head: O, mut tail: Vec<(Op, O)>, combine: impl Fn(O, Op, O) -> O) -> O {
    let Some((mut op, mut acc)) = tail.pop() else {
        return head;
    };
    while let Some((prev_op, operand)) = tail.pop() {
        acc = combine(operand, op, acc);
        op = prev_op;
    }
    combine(head, op, acc)
}

/// Level for a unary prefix operator.
///
/// Parses `op* next`; operators apply innermost first, so `- - x` yields
/// `apply(-, apply(-, x))`.
#[must_use]
pub fn prefix<'a, I, O, E, Op, P, F>(op: P, apply: F) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    Op: 'a,
    P: Parser<I, Op, Error = E> + Clone + 'a,
    F: Fn(Op, O) -> O + 'a,
{
    let apply = Rc::new(apply);
    Level::new(move |_top, next| {
        let apply = Rc::clone(&apply);
        op.clone()
            .repeated()
            .then(next)
            .foldr(move |operator, operand| apply(operator, operand))
            .boxed()
    })
}

/// Level that tries `parser` and falls back to the next level.
///
/// Use it for literals and other terminals.
#[must_use]
pub fn or_next<'a, I, O, E, P>(parser: P) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    P: Parser<I, O, Error = E> + Clone + 'a,
{
    Level::new(move |_top, next| parser.clone().or(next).boxed())
}

/// Level for a delimited sub-expression that restarts at the loosest level.
///
/// Equivalent to [`or_next`] applied to `open top close`. Place it last so
/// grouping overrides every other level.
#[must_use]
pub fn parenthesized<'a, I, O, E, A, B, Open, Close>(
    open: Open,
    close: Close,
) -> Level<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    A: 'a,
    B: 'a,
    Open: Parser<I, A, Error = E> + Clone + 'a,
    Close: Parser<I, B, Error = E> + Clone + 'a,
{
    Level::new(move |top, next| {
        top.delimited_by(open.clone(), close.clone())
            .or(next)
            .boxed()
    })
}
