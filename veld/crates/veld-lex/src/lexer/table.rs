//! Table-driven recognition: keywords, symbols and type names.

use super::recognizer::RecognizerMatch;
use crate::ascii::ident_len;
use crate::tables::{LexicalTable, PrefixRule, KEYWORDS, PRIMITIVE_TYPES, SYMBOLS};
use crate::token::TokenKind;

fn match_table(table: &LexicalTable, window: &str, rule: PrefixRule) -> Option<RecognizerMatch> {
    table
        .lookup(window, rule)
        .map(|(spelling, kind)| RecognizerMatch::new(kind, spelling.len()))
}

pub(crate) fn match_keyword(window: &str, rule: PrefixRule) -> Option<RecognizerMatch> {
    match_table(&KEYWORDS, window, rule)
}

pub(crate) fn match_symbol(window: &str, rule: PrefixRule) -> Option<RecognizerMatch> {
    match_table(&SYMBOLS, window, rule)
}

/// Matches a built-in type name, or failing that a custom type name: an
/// identifier whose first character is an uppercase letter.
pub(crate) fn match_type(window: &str, rule: PrefixRule) -> Option<RecognizerMatch> {
    if let Some(m) = match_table(&PRIMITIVE_TYPES, window, rule) {
        return Some(m);
    }

    if !window.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    Some(RecognizerMatch::new(TokenKind::Type, ident_len(window)))
}
