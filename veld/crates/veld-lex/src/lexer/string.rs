//! String literal recognition.
//!
//! A string is a double-quoted or single-quoted run with no quote of the
//! same kind inside it, closed on the same line. There are no escape
//! sequences; the token text includes both quotes.

use super::recognizer::RecognizerMatch;
use crate::token::TokenKind;

const QUOTES: [char; 2] = ['"', '\''];

/// Matches a closed string literal at the start of `window`.
pub(crate) fn match_string(window: &str) -> Option<RecognizerMatch> {
    let quote = opening_quote(window)?;
    let body = &window[1..];
    let close = body.find(quote)?;
    Some(RecognizerMatch::new(TokenKind::String, close + 2))
}

/// Returns the quote character `window` starts with, if any.
pub(crate) fn opening_quote(window: &str) -> Option<char> {
    window.chars().next().filter(|c| QUOTES.contains(c))
}
