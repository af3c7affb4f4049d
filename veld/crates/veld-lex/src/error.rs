//! Lexical errors.
//!
//! A [`LexError`] is returned directly in strict mode. In lenient mode the
//! same error is turned into a [`Diagnostic`] with a source snippet and
//! recorded in the caller's [`Handler`](veld_util::Handler).

use thiserror::Error;
use veld_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};

/// An error found while scanning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No recognizer matches at this character.
    #[error("unrecognized character {ch:?} at {span}")]
    UnrecognizedCharacter { ch: char, span: Span },

    /// A quote opens a string that is not closed on the same line.
    ///
    /// The span runs from the quote to the end of the line.
    #[error("unterminated string literal opened with {quote:?} at {span}")]
    UnterminatedString { quote: char, span: Span },
}

/// Result type alias using LexError.
pub type Result<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Returns the span of the offending text.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. }
            | LexError::UnterminatedString { span, .. } => *span,
        }
    }

    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// The message without its location.
    pub fn headline(&self) -> String {
        match self {
            LexError::UnrecognizedCharacter { ch, .. } => {
                format!("unrecognized character {:?}", ch)
            },
            LexError::UnterminatedString { .. } => "unterminated string literal".to_string(),
        }
    }

    /// Builds the diagnostic for this error.
    ///
    /// `line_text` is the full source line containing the error, used for
    /// the snippet.
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_lex::LexError;
    /// use veld_util::Span;
    ///
    /// let error = LexError::UnrecognizedCharacter { ch: '$', span: Span::new(9, 10, 1, 10) };
    /// let diag = error.to_diagnostic("let x := $");
    /// assert!(diag.to_string().starts_with("error[E1001]: unrecognized character '$'"));
    /// ```
    pub fn to_diagnostic(&self, line_text: &str) -> Diagnostic {
        let span = self.span();
        let start_column = span.column as usize;
        let width = match self {
            LexError::UnrecognizedCharacter { .. } => 1,
            LexError::UnterminatedString { .. } => line_text
                .chars()
                .skip(start_column.saturating_sub(1))
                .count()
                .max(1),
        };
        let (label, help) = match self {
            LexError::UnrecognizedCharacter { .. } => {
                ("no token starts here", "remove the character or put it inside a string")
            },
            LexError::UnterminatedString { quote, .. } => (
                "string is not closed on this line",
                if *quote == '"' {
                    "add a closing '\"' before the end of the line"
                } else {
                    "add a closing '\\'' before the end of the line"
                },
            ),
        };

        DiagnosticBuilder::error(self.headline())
            .code(self.code())
            .span(span)
            .snippet(SourceSnippet::new(
                line_text,
                span.line as usize,
                start_column,
                start_column + width,
                Some(label),
            ))
            .help(help)
            .build()
    }
}
