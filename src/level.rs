//! Level creators, the unit a composed grammar is built from.
//!
//! A [`Level`] wraps a function that receives two parsers and returns the
//! parser for one precedence class:
//!
//! - `top` is a deferred handle to the whole composed grammar. It may be
//!   embedded in the level's parser (for parenthesised sub-expressions) but is
//!   only resolved once parsing starts.
//! - `next` is the parser formed by every level listed after this one, i.e.
//!   the tighter-binding operand source.

use std::fmt;

use chumsky::BoxedParser;
use chumsky::recursive::Recursive;

type CreateFn<'a, I, O, E> =
    dyn Fn(Recursive<'a, I, O, E>, BoxedParser<'a, I, O, E>) -> BoxedParser<'a, I, O, E> + 'a;

/// One precedence level of a composed expression grammar.
///
/// Levels are usually built with the combinators in [`crate::combinators`];
/// [`Level::new`] accepts any closure for levels those do not cover.
///
/// # Examples
///
/// ```rust
/// use chumsky::prelude::*;
/// use stratum::{Level, ParseError};
///
/// // Postfix `!` applied to the tighter-binding operand.
/// let factorial: Level<'_, char, String, ParseError<char>> = Level::new(|_top, next| {
///     next.then(just('!').repeated())
///         .foldl(|operand, _| format!("({operand}!)"))
///         .boxed()
/// });
/// # drop(factorial);
/// ```
pub struct Level<'a, I, O, E: chumsky::Error<I>> {
    create: Box<CreateFn<'a, I, O, E>>,
}

impl<'a, I, O, E: chumsky::Error<I>> Level<'a, I, O, E> {
    /// Wrap a level-creating function.
    #[must_use]
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(Recursive<'a, I, O, E>, BoxedParser<'a, I, O, E>) -> BoxedParser<'a, I, O, E> + 'a,
    {
        Self {
            create: Box::new(create),
        }
    }

    /// Build this level's parser from the grammar handle and the next level.
    ///
    /// The creator must not run `top` while building; the handle is only
    /// defined once every level has been created.
    #[must_use]
    pub fn create(
        &self,
        top: Recursive<'a, I, O, E>,
        next: BoxedParser<'a, I, O, E>,
    ) -> BoxedParser<'a, I, O, E> {
        (self.create)(top, next)
    }
}

impl<I, O, E: chumsky::Error<I>> fmt::Debug for Level<'_, I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level").finish_non_exhaustive()
    }
}
