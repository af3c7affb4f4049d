//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing a range of
//! source text together with the human-readable line and column where the
//! range begins.
//!
//! # Examples
//!
//! ```
//! use veld_util::span::Span;
//!
//! // `count` on the first line, starting at column 5
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

use serde::Serialize;
use static_assertions::assert_impl_all;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Line and column numbers of the start (1-based, columns count characters)
///
/// # Examples
///
/// ```
/// use veld_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 3);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
///
/// // A point span marks a single location
/// let point = Span::point(7, 2, 1);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

// Tokens holding spans are shared across threads by downstream phases.
assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_util::span::Span;
    ///
    /// let point = Span::point(12, 3, 4);
    /// assert_eq!(point.start, point.end);
    /// assert_eq!(point.line, 3);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the source text covered by this span
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_util::span::Span;
    ///
    /// let source = "let mut x";
    /// assert_eq!(Span::new(4, 7, 1, 5).slice(source), Some("mut"));
    /// assert_eq!(Span::new(4, 70, 1, 5).slice(source), None);
    /// ```
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 8, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 8);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 4);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_point_is_empty() {
        let span = Span::point(9, 1, 10);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 12, 7).to_string(), "12:7");
    }

    #[test]
    fn test_span_slice() {
        let source = "x := 12.5";
        assert_eq!(Span::new(5, 9, 1, 6).slice(source), Some("12.5"));
        assert_eq!(Span::new(5, 10, 1, 6).slice(source), None);
    }

    #[quickcheck]
    fn prop_slice_has_span_length(text: String, a: usize, b: usize) -> bool {
        let (start, end) = (a.min(b), a.max(b));
        let span = Span::new(start, end, 1, 1);
        match span.slice(&text) {
            Some(slice) => slice.len() == span.len(),
            None => end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end),
        }
    }

    #[quickcheck]
    fn prop_point_is_empty(offset: usize, line: u32, column: u32) -> bool {
        let span = Span::point(offset, line, column);
        span.is_empty() && span.len() == 0 && span.to_string() == format!("{}:{}", line, column)
    }
}
