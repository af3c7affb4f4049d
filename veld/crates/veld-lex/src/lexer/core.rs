//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::{trace, warn};
use veld_util::{Handler, Span};

use super::recognizer::Recognizer;
use super::string::opening_quote;
use crate::config::{LexMode, LexerConfig};
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

/// Lexer for the veld language.
///
/// The lexer scans the whole buffer with one cursor. At each position it
/// skips whitespace, then offers the rest of the current line to the
/// recognizers in priority order. Line breaks end a line; no token spans
/// two lines.
///
/// # Examples
///
/// ```
/// use veld_lex::{Lexer, TokenKind};
/// use veld_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("let x := 4", &mut handler);
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!(lexer.column(), 4);
/// ```
pub struct Lexer<'a, 'h> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors in lenient mode.
    handler: &'h mut Handler,

    config: LexerConfig,

    /// Whether a token has been emitted since the last line break.
    line_has_token: bool,

    /// Set at end of input and after a strict-mode error.
    finished: bool,

    token_count: usize,
}

impl<'a, 'h> Lexer<'a, 'h> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'h mut Handler) -> Self {
        Self::with_config(source, LexerConfig::default(), handler)
    }

    pub fn with_config(source: &'a str, config: LexerConfig, handler: &'h mut Handler) -> Self {
        let mut cursor = Cursor::new(source);
        cursor.skip_byte_order_mark();

        Self {
            cursor,
            handler,
            config,
            line_has_token: false,
            finished: false,
            token_count: 0,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// In strict mode a lexical error is returned as `Err` and the lexer
    /// yields nothing afterwards. In lenient mode errors go to the handler
    /// and scanning continues.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        loop {
            if self.finished {
                return Ok(None);
            }

            self.cursor.skip_inline_whitespace();

            if self.cursor.is_at_end() {
                self.finished = true;
                if !self.config.emit_eof {
                    return Ok(None);
                }
                let span = self.cursor.span_from(self.cursor.snapshot());
                return Ok(Some(self.emit(TokenKind::Eof, "", span)));
            }

            if self.cursor.current_char() == '\n' {
                if let Some(token) = self.lex_line_break() {
                    return Ok(Some(token));
                }
                continue;
            }

            let window = self.cursor.line_window();
            let start = self.cursor.snapshot();

            let Some((_, matched)) = Recognizer::first_match(window, self.config.prefix_rule()) else {
                match self.recover(window, start)? {
                    Some(token) => return Ok(Some(token)),
                    None => continue,
                }
            };

            let text = matched.text(window);
            self.cursor.advance_bytes(matched.len);

            if matched.kind.is_comment() && !self.config.keep_comments {
                trace!(text, "dropped comment");
                continue;
            }

            let span = self.cursor.span_from(start);
            return Ok(Some(self.emit(matched.kind, text, span)));
        }
    }

    /// Consumes a line break, returning a `NEWLINE` token when configured
    /// and the finished line produced a token.
    fn lex_line_break(&mut self) -> Option<Token<'a>> {
        let start = self.cursor.snapshot();
        self.cursor.advance();

        let line_had_token = std::mem::take(&mut self.line_has_token);
        if !(self.config.emit_newlines && line_had_token) {
            return None;
        }

        let text = self.cursor.slice_from(start.position);
        let span = self.cursor.span_from(start);
        let token = self.emit(TokenKind::Newline, text, span);
        self.line_has_token = false;
        Some(token)
    }

    /// Handles a position where no recognizer matches.
    ///
    /// An opening quote is an unterminated string and the rest of the line
    /// is skipped; anything else skips exactly one character.
    fn recover(&mut self, window: &'a str, start: CursorSnapshot) -> Result<Option<Token<'a>>> {
        let error = match opening_quote(window) {
            Some(quote) => {
                self.cursor.advance_bytes(window.len());
                LexError::UnterminatedString {
                    quote,
                    span: self.cursor.span_from(start),
                }
            },
            None => {
                let ch = self.cursor.current_char();
                self.cursor.advance();
                LexError::UnrecognizedCharacter {
                    ch,
                    span: self.cursor.span_from(start),
                }
            },
        };

        if self.config.mode == LexMode::Strict {
            self.finished = true;
            return Err(error);
        }

        self.report_error(&error);

        if !self.config.emit_invalid_tokens {
            return Ok(None);
        }
        let text = self.cursor.slice_from(start.position);
        let span = error.span();
        Ok(Some(self.emit(TokenKind::Invalid, text, span)))
    }

    /// Records a lexical error in the handler.
    pub fn report_error(&mut self, error: &LexError) {
        let span = error.span();
        warn!(
            code = %error.code(),
            line = span.line,
            column = span.column,
            "{}",
            error.headline()
        );
        let diagnostic = error.to_diagnostic(self.cursor.current_line());
        self.handler.emit_diagnostic(diagnostic);
    }

    fn emit(&mut self, kind: TokenKind, text: &'a str, span: Span) -> Token<'a> {
        self.line_has_token = true;
        self.token_count += 1;
        trace!(kind = kind.name(), text, line = span.line, column = span.column, "token");
        Token::new(kind, text, span)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of tokens produced so far.
    pub fn token_count(&self) -> usize {
        self.token_count
    }
}

impl<'a> Iterator for Lexer<'a, '_> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_> {}
