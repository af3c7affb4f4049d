//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while scanning the whole source buffer. It handles UTF-8 encoding
//! correctly and tracks line/column information for spans and diagnostics.

use veld_util::Span;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// A cursor over the full source buffer.
///
/// The cursor keeps the byte offset together with the 1-based line and
/// column (columns count characters, not bytes).
///
/// # Example
///
/// ```
/// use veld_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x := 4");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// assert_eq!(Cursor::new("").current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return '\0';
        };

        // Fast path for ASCII (most common case)
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return;
        };

        // Fast path for ASCII (most common)
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Steps over a byte order mark at the start of the source.
    ///
    /// Only the byte position moves; the first character after the mark
    /// is still at column 1.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\u{FEFF}let");
    /// cursor.skip_byte_order_mark();
    /// assert_eq!(cursor.current_char(), 'l');
    /// assert_eq!((cursor.position(), cursor.column()), (3, 1));
    /// ```
    pub fn skip_byte_order_mark(&mut self) {
        if self.position == 0 && self.source.starts_with(BYTE_ORDER_MARK) {
            self.position = BYTE_ORDER_MARK.len_utf8();
        }
    }

    /// Advances past `len` bytes of the source, counting characters for the
    /// column.
    ///
    /// `len` must end on a char boundary within the current line, which holds
    /// for every recognizer match.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("'né' x");
    /// cursor.advance_bytes(5);
    /// assert_eq!(cursor.position(), 5);
    /// assert_eq!(cursor.column(), 5);
    /// ```
    pub fn advance_bytes(&mut self, len: usize) {
        let target = (self.position + len).min(self.source.len());
        while self.position < target {
            self.advance();
        }
    }

    /// Skips spaces, tabs, carriage returns and other whitespace, stopping
    /// at a line break.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\nlet");
    /// cursor.skip_inline_whitespace();
    /// assert_eq!(cursor.current_char(), '\n');
    /// ```
    pub fn skip_inline_whitespace(&mut self) {
        while !self.is_at_end() {
            let c = self.current_char();
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Returns the rest of the current line, without its line break and
    /// without trailing whitespace.
    ///
    /// Recognizers only ever see this window, so no token crosses a line.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x := 1  \r\ny");
    /// assert_eq!(cursor.line_window(), "x := 1");
    /// ```
    pub fn line_window(&self) -> &'a str {
        let rest = self.remaining();
        let end = rest.find('\n').unwrap_or(rest.len());
        rest[..end].trim_end()
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.line(), 1);
    /// cursor.advance_bytes(2);
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the full text of the line the cursor is on, without its line
    /// break.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nlet x := $\nb");
    /// cursor.advance_bytes(6);
    /// assert_eq!(cursor.current_line(), "let x := $");
    /// ```
    pub fn current_line(&self) -> &'a str {
        let start = match self.source[..self.position].rfind('\n') {
            Some(i) => i + 1,
            None if self.source.starts_with(BYTE_ORDER_MARK) => BYTE_ORDER_MARK.len_utf8(),
            None => 0,
        };
        let end = self.source[self.position..]
            .find('\n')
            .map_or(self.source.len(), |i| self.position + i);
        self.source[start..end].trim_end_matches('\r')
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// Token starts are recorded as snapshots so the token's span can be
    /// built once its end is known.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the span from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use veld_lex::cursor::Cursor;
    /// use veld_util::Span;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// cursor.advance_bytes(4);
    /// let start = cursor.snapshot();
    /// cursor.advance();
    /// assert_eq!(cursor.span_from(start), Span::new(4, 5, 1, 5));
    /// ```
    pub fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(start.position, self.position, start.line, start.column)
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
