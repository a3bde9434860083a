//! Composition of precedence levels into a single expression parser.
//!
//! [`levels`] right-folds an ordered list of [`Level`]s over a bottom parser.
//! The first level binds loosest and is where every parse starts; each level
//! receives the fold of all later levels as its operand parser. The whole
//! fold runs inside [`chumsky::recursive::recursive`], which hands every level
//! a forward-declared handle to the finished grammar and defines that handle
//! exactly once when the fold completes.

use chumsky::BoxedParser;
use chumsky::prelude::*;
use log::{debug, trace};

use crate::error::{ParseError, Span};
use crate::level::Level;

/// Compose `creators` into one parser, with `bottom` as the innermost
/// fallback.
///
/// `creators` is ordered loosest-binding first. The last level receives
/// `bottom` as its `next` parser. With no levels the result behaves exactly
/// like `bottom`.
///
/// The returned parser is immutable and can be cloned cheaply and reused for
/// any number of parses.
#[must_use]
pub fn levels<'a, I, O, E, B, L>(bottom: B, creators: L) -> BoxedParser<'a, I, O, E>
where
    I: Clone + 'a,
    O: 'a,
    E: chumsky::Error<I> + 'a,
    B: Parser<I, O, Error = E> + 'a,
    L: IntoIterator<Item = Level<'a, I, O, E>>,
{
    let creators: Vec<Level<'a, I, O, E>> = creators.into_iter().collect();
    debug!("composing expression parser from {} levels", creators.len());
    recursive(|top| {
        creators
            .iter()
            .rev()
            .fold(bottom.boxed(), |next, level| level.create(top.clone(), next))
    })
    .boxed()
}

/// Compose `creators` over [`no_viable_alternative`].
///
/// # Examples
///
/// ```rust
/// use chumsky::prelude::*;
/// use stratum::{left_associative, levels_with_default, or_next, ParseError};
///
/// let digit = filter(char::is_ascii_digit).map(String::from);
/// let parser = levels_with_default([
///     left_associative(just('+'), |lhs, rhs| format!("({lhs}+{rhs})")),
///     left_associative(just('*'), |lhs, rhs| format!("({lhs}*{rhs})")),
///     or_next(digit),
/// ]);
///
/// let grouped: Result<String, Vec<ParseError<char>>> = parser.parse("1+2*3");
/// assert_eq!(grouped.as_deref(), Ok("(1+(2*3))"));
/// ```
#[must_use]
pub fn levels_with_default<'a, I, O, L>(creators: L) -> BoxedParser<'a, I, O, ParseError<I>>
where
    I: Clone + PartialEq + 'a,
    O: 'a,
    L: IntoIterator<Item = Level<'a, I, O, ParseError<I>>>,
{
    levels(no_viable_alternative(), creators)
}

/// The default bottom parser.
///
/// It consumes nothing and always fails with
/// [`ErrorReason::NoViableAlternative`](crate::ErrorReason::NoViableAlternative).
#[must_use]
pub fn no_viable_alternative<'a, I, O>() -> BoxedParser<'a, I, O, ParseError<I>>
where
    I: Clone + PartialEq + 'a,
    O: 'a,
{
    empty::<ParseError<I>>()
        .try_map(|(), span: Span| {
            trace!("bottom parser reached at {span:?}");
            Err(ParseError::no_viable_alternative(span))
        })
        .boxed()
}
