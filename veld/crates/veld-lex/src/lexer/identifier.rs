//! Identifier and decorator recognition.
//!
//! Identifiers start with a letter or underscore, followed by letters,
//! digits or underscores. Reserved words, word operators and type names are
//! claimed by earlier recognizers, so anything reaching here is a plain
//! name.

use super::recognizer::RecognizerMatch;
use crate::ascii::ident_len;
use crate::token::TokenKind;

const DECORATOR_MARKER: char = '@';

/// Matches `@` immediately followed by an identifier.
pub(crate) fn match_decorator(window: &str) -> Option<RecognizerMatch> {
    let name = window.strip_prefix(DECORATOR_MARKER)?;
    match ident_len(name) {
        0 => None,
        len => Some(RecognizerMatch::new(TokenKind::Decorator, 1 + len)),
    }
}

pub(crate) fn match_identifier(window: &str) -> Option<RecognizerMatch> {
    match ident_len(window) {
        0 => None,
        len => Some(RecognizerMatch::new(TokenKind::Identifier, len)),
    }
}
