//! Number literal recognition.
//!
//! # Number Formats
//!
//! - Integer: `0`, `42`, `007`
//! - Float: `3.14`, `1e10`, `2.5e-3`, `6.02E+23`
//!
//! A float needs at least one digit before the point and one after it, or
//! an exponent. Signs are separate `MINUS`/`PLUS` tokens.

use super::recognizer::RecognizerMatch;
use crate::ascii::digits_len;
use crate::token::TokenKind;

/// Matches a float literal at the start of `window`.
pub(crate) fn match_float(window: &str) -> Option<RecognizerMatch> {
    let int_len = digits_len(window);
    if int_len == 0 {
        return None;
    }

    let rest = &window[int_len..];
    let len = match rest.strip_prefix('.') {
        Some(fraction) => {
            let frac_len = digits_len(fraction);
            if frac_len == 0 {
                return None;
            }
            let mantissa = int_len + 1 + frac_len;
            mantissa + exponent_len(&window[mantissa..]).unwrap_or(0)
        },
        None => int_len + exponent_len(rest)?,
    };

    Some(RecognizerMatch::new(TokenKind::Float, len))
}

/// Matches an integer literal at the start of `window`.
pub(crate) fn match_integer(window: &str) -> Option<RecognizerMatch> {
    match digits_len(window) {
        0 => None,
        len => Some(RecognizerMatch::new(TokenKind::Integer, len)),
    }
}

/// Length of an exponent (`e`/`E`, optional sign, digits) at the start of
/// `s`.
fn exponent_len(s: &str) -> Option<usize> {
    let after_marker = s.strip_prefix(['e', 'E'])?;
    let sign_len = usize::from(after_marker.starts_with(['+', '-']));
    let digits = digits_len(&after_marker[sign_len..]);
    (digits > 0).then_some(1 + sign_len + digits)
}
