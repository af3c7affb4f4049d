//! Literal value decoding.
//!
//! Tokens keep their source text; this module turns literal tokens into
//! values for later phases. String contents are returned as written, since
//! the language has no escape sequences.

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// The value of a literal token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'a> {
    Int(u64),
    Float(f64),
    /// String contents without the surrounding quotes.
    Str(&'a str),
    Bool(bool),
    Nil,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("{kind} token is not a literal")]
    NotALiteral { kind: TokenKind },

    #[error("integer literal '{text}' does not fit in 64 bits")]
    IntegerOverflow { text: String },

    #[error("float literal '{text}' is not finite")]
    NonFiniteFloat { text: String },

    #[error("malformed {kind} literal '{text}'")]
    Malformed { kind: TokenKind, text: String },
}

impl<'a> Literal<'a> {
    /// Decodes the value of a literal token.
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_lex::{tokenize, Literal};
    ///
    /// let tokens = tokenize("12.5 'hi' nil").unwrap();
    /// assert_eq!(Literal::from_token(&tokens[0]), Ok(Literal::Float(12.5)));
    /// assert_eq!(Literal::from_token(&tokens[1]), Ok(Literal::Str("hi")));
    /// assert_eq!(Literal::from_token(&tokens[2]), Ok(Literal::Nil));
    /// ```
    pub fn from_token(token: &Token<'a>) -> Result<Self, LiteralError> {
        let text = token.text;
        match token.kind {
            TokenKind::Integer => text
                .parse::<u64>()
                .map(Literal::Int)
                .map_err(|_| LiteralError::IntegerOverflow { text: text.to_string() }),
            TokenKind::Float => match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Literal::Float(value)),
                Ok(_) => Err(LiteralError::NonFiniteFloat { text: text.to_string() }),
                Err(_) => Err(LiteralError::Malformed {
                    kind: token.kind,
                    text: text.to_string(),
                }),
            },
            TokenKind::String => strip_quotes(text).map(Literal::Str).ok_or_else(|| {
                LiteralError::Malformed {
                    kind: token.kind,
                    text: text.to_string(),
                }
            }),
            TokenKind::True => Ok(Literal::Bool(true)),
            TokenKind::False => Ok(Literal::Bool(false)),
            TokenKind::Nil => Ok(Literal::Nil),
            kind => Err(LiteralError::NotALiteral { kind }),
        }
    }
}

fn strip_quotes(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let open = chars.next()?;
    let close = chars.next_back()?;
    (open == close && (open == '"' || open == '\'')).then(|| chars.as_str())
}
