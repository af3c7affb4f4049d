//! Comment recognition.
//!
//! Line comments start with `--` and run to the end of the line. The token
//! text keeps the marker.

use super::recognizer::RecognizerMatch;
use crate::token::TokenKind;

const LINE_COMMENT_MARKER: &str = "--";

/// Matches a line comment covering the whole window.
pub(crate) fn match_line_comment(window: &str) -> Option<RecognizerMatch> {
    window
        .starts_with(LINE_COMMENT_MARKER)
        .then(|| RecognizerMatch::new(TokenKind::LineComment, window.len()))
}
