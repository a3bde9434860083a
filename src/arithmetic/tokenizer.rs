//! Lexical analysis for arithmetic expressions.
//!
//! The `logos` crate recognises lexemes. Whitespace is lexed as a token of
//! its own and dropped afterwards, so every emitted span maps straight back
//! into the source.

use log::debug;
use logos::Logos;

use crate::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"[0-9]+")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Significant tokens of the arithmetic grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Non-negative integer literal.
    Number(i64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    /// Unrecognised input, including integer literals that overflow `i64`.
    Error,
}

/// Tokenise `src`, dropping whitespace.
///
/// Lexing never fails: unrecognised characters become [`Token::Error`],
/// which the grammar rejects with a positioned diagnostic.
///
/// # Examples
///
/// ```rust
/// use stratum::arithmetic::{Token, tokenize};
///
/// let tokens = tokenize("12 + 3");
/// assert_eq!(tokens, vec![
///     (Token::Number(12), 0..2),
///     (Token::Plus, 3..4),
///     (Token::Number(3), 5..6),
/// ]);
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(Token, Span)> {
    let mut lexer = Lexeme::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = match result {
            Ok(Lexeme::Whitespace) => continue,
            Ok(Lexeme::Number) => number(lexer.slice()),
            Ok(Lexeme::Plus) => Token::Plus,
            Ok(Lexeme::Minus) => Token::Minus,
            Ok(Lexeme::Star) => Token::Star,
            Ok(Lexeme::Slash) => Token::Slash,
            Ok(Lexeme::Caret) => Token::Caret,
            Ok(Lexeme::LParen) => Token::LParen,
            Ok(Lexeme::RParen) => Token::RParen,
            Err(()) => {
                debug!("unrecognised input {:?} at {span:?}", lexer.slice());
                Token::Error
            }
        };
        out.push((token, span));
    }
    out
}

fn number(text: &str) -> Token {
    text.parse::<i64>().map_or_else(
        |err| {
            debug!("integer literal {text} rejected: {err}");
            Token::Error
        },
        Token::Number,
    )
}
