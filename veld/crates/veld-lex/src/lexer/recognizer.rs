//! Ordered recognizer dispatch.
//!
//! At each scan position the lexer hands the current line window to each
//! [`Recognizer`] in [`Recognizer::PRIORITY`] order; the first one that
//! matches wins. The order resolves every ambiguous prefix:
//!
//! - comments claim the rest of the line before anything else looks at it
//! - strings come before keywords so quoted text is never split
//! - keywords come before numbers, symbols and names
//! - floats come before integers so `12.5` is not `12` `.` `5`
//! - symbols come before types and names, so `and` is an operator
//! - built-in and custom type names come before plain identifiers
//! - decorators come before identifiers so `@` and its name stay together

use super::{comment, identifier, number, string, table};
use crate::tables::PrefixRule;
use crate::token::TokenKind;

/// The result of a successful recognizer attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecognizerMatch {
    pub kind: TokenKind,
    /// Length of the match in bytes, always non-zero.
    pub len: usize,
}

impl RecognizerMatch {
    #[inline]
    pub const fn new(kind: TokenKind, len: usize) -> Self {
        Self { kind, len }
    }

    /// Returns the matched prefix of `window`.
    #[inline]
    pub fn text<'a>(&self, window: &'a str) -> &'a str {
        &window[..self.len]
    }
}

/// One token recognizer.
///
/// # Examples
///
/// ```
/// use veld_lex::lexer::Recognizer;
/// use veld_lex::tables::PrefixRule;
/// use veld_lex::TokenKind;
///
/// let (recognizer, m) = Recognizer::first_match("12.5 + x", PrefixRule::Longest).unwrap();
/// assert_eq!(recognizer, Recognizer::Float);
/// assert_eq!(m.kind, TokenKind::Float);
/// assert_eq!(m.len, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recognizer {
    Comment,
    String,
    Keyword,
    Float,
    Integer,
    Symbol,
    Type,
    Decorator,
    Identifier,
}

impl Recognizer {
    /// Dispatch order, highest priority first.
    pub const PRIORITY: [Recognizer; 9] = [
        Recognizer::Comment,
        Recognizer::String,
        Recognizer::Keyword,
        Recognizer::Float,
        Recognizer::Integer,
        Recognizer::Symbol,
        Recognizer::Type,
        Recognizer::Decorator,
        Recognizer::Identifier,
    ];

    /// Attempts to match a token at the start of `window`.
    ///
    /// `window` must start at the scan position, with leading whitespace
    /// already skipped. `rule` applies to the table-driven recognizers.
    pub fn try_match(self, window: &str, rule: PrefixRule) -> Option<RecognizerMatch> {
        match self {
            Recognizer::Comment => comment::match_line_comment(window),
            Recognizer::String => string::match_string(window),
            Recognizer::Keyword => table::match_keyword(window, rule),
            Recognizer::Float => number::match_float(window),
            Recognizer::Integer => number::match_integer(window),
            Recognizer::Symbol => table::match_symbol(window, rule),
            Recognizer::Type => table::match_type(window, rule),
            Recognizer::Decorator => identifier::match_decorator(window),
            Recognizer::Identifier => identifier::match_identifier(window),
        }
    }

    /// Tries every recognizer in priority order and returns the first match.
    pub fn first_match(window: &str, rule: PrefixRule) -> Option<(Recognizer, RecognizerMatch)> {
        Self::PRIORITY
            .iter()
            .find_map(|&recognizer| recognizer.try_match(window, rule).map(|m| (recognizer, m)))
    }
}
