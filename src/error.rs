//! Error type reported by composed level parsers.
//!
//! [`ParseError`] implements [`chumsky::Error`] so it can serve as the
//! `Error` type of any `chumsky` parser, including the ones produced by
//! [`crate::levels`]. Unlike [`chumsky::error::Simple`] it gives the bottom
//! parser's diagnostic precedence when errors raised at the same position are
//! merged, so a caller sees [`ErrorReason::NoViableAlternative`] whenever no
//! level matched.

use std::fmt;

use thiserror::Error;

/// Range of input positions an error covers.
pub type Span = std::ops::Range<usize>;

/// Diagnostic emitted when the bottom parser of a composed grammar is reached.
pub const NO_VIABLE_ALTERNATIVE: &str = "bottom parser reached, no viable alternative";

/// Why a parser failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorReason {
    /// The input did not match any of the expected tokens.
    #[error("unexpected input")]
    Unexpected,
    /// A grammar-specific failure.
    #[error("{0}")]
    Custom(String),
    /// Every level, and the bottom parser, failed at this position.
    #[error("{}", NO_VIABLE_ALTERNATIVE)]
    NoViableAlternative,
}

/// A parse failure over input tokens of type `I`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<I> {
    span: Span,
    reason: ErrorReason,
    expected: Vec<Option<I>>,
    found: Option<I>,
    label: Option<&'static str>,
}

impl<I> ParseError<I> {
    fn with_reason(span: Span, reason: ErrorReason) -> Self {
        Self {
            span,
            reason,
            expected: Vec::new(),
            found: None,
            label: None,
        }
    }

    /// Create an error carrying a free-form message.
    #[must_use]
    pub fn custom(span: Span, msg: impl Into<String>) -> Self {
        Self::with_reason(span, ErrorReason::Custom(msg.into()))
    }

    /// Create the error produced by the default bottom parser.
    #[must_use]
    pub fn no_viable_alternative(span: Span) -> Self {
        Self::with_reason(span, ErrorReason::NoViableAlternative)
    }

    /// Input range the error refers to.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Why the parse failed.
    #[must_use]
    pub fn reason(&self) -> &ErrorReason {
        &self.reason
    }

    /// Tokens that would have been accepted. `None` stands for end of input.
    #[must_use]
    pub fn expected(&self) -> &[Option<I>] {
        &self.expected
    }

    /// The offending token, or `None` at end of input.
    #[must_use]
    pub fn found(&self) -> Option<&I> {
        self.found.as_ref()
    }

    /// Innermost label attached with `labelled`, if any.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Return `true` if the bottom parser produced this error.
    #[must_use]
    pub fn is_no_viable_alternative(&self) -> bool {
        self.reason == ErrorReason::NoViableAlternative
    }
}

impl<I: PartialEq> ParseError<I> {
    fn extend_expected(&mut self, expected: impl IntoIterator<Item = Option<I>>) {
        for token in expected {
            if !self.expected.contains(&token) {
                self.expected.push(token);
            }
        }
    }
}

impl<I: PartialEq> chumsky::Error<I> for ParseError<I> {
    type Span = Span;
    type Label = &'static str;

    fn expected_input_found<Iter: IntoIterator<Item = Option<I>>>(
        span: Self::Span,
        expected: Iter,
        found: Option<I>,
    ) -> Self {
        let mut error = Self::with_reason(span, ErrorReason::Unexpected);
        error.found = found;
        error.extend_expected(expected);
        error
    }

    fn with_label(mut self, label: Self::Label) -> Self {
        self.label.get_or_insert(label);
        self
    }

    /// Combine two errors raised at the same position.
    ///
    /// `NoViableAlternative` beats every other reason and a custom message
    /// beats a plain mismatch. Expected tokens are unioned.
    fn merge(mut self, other: Self) -> Self {
        self.reason = match (self.reason, other.reason) {
            (ErrorReason::NoViableAlternative, _) | (_, ErrorReason::NoViableAlternative) => {
                ErrorReason::NoViableAlternative
            }
            (ErrorReason::Unexpected, reason) | (reason, _) => reason,
        };
        self.label = self.label.or(other.label);
        if self.found.is_none() {
            self.found = other.found;
        }
        self.extend_expected(other.expected);
        self
    }
}

fn describe<I: fmt::Debug>(token: Option<&I>) -> String {
    token.map_or_else(|| "end of input".to_string(), |tok| format!("{tok:?}"))
}

impl<I: fmt::Debug> fmt::Display for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)?;
        if let Some(label) = self.label {
            write!(f, " in {label}")?;
        }
        if self.reason == ErrorReason::Unexpected {
            write!(f, ": found {}", describe(self.found.as_ref()))?;
            if !self.expected.is_empty() {
                let expected: Vec<String> =
                    self.expected.iter().map(|tok| describe(tok.as_ref())).collect();
                write!(f, ", expected one of {}", expected.join(", "))?;
            }
        }
        write!(f, " at {}..{}", self.span.start, self.span.end)
    }
}

impl<I: fmt::Debug> std::error::Error for ParseError<I> {}
