//! ASCII character classes for the veld lexer.
//!
//! The language's names are ASCII only: a letter or underscore followed by
//! letters, digits or underscores. The `*_len` helpers return how many
//! leading bytes of a string form a run of the given class, which is also a
//! valid char boundary since every matched byte is ASCII.

/// Checks if a character may start an identifier.
///
/// # Example
///
/// ```
/// use veld_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use veld_lex::ascii::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Length in bytes of the identifier at the start of `s`, or 0 if `s` does
/// not start with one.
///
/// # Example
///
/// ```
/// use veld_lex::ascii::ident_len;
///
/// assert_eq!(ident_len("count + 1"), 5);
/// assert_eq!(ident_len("_x1:"), 3);
/// assert_eq!(ident_len("1x"), 0);
/// ```
pub fn ident_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(&b) if is_ident_start(b as char) => {
            1 + bytes[1..]
                .iter()
                .take_while(|&&b| is_ident_continue(b as char))
                .count()
        },
        _ => 0,
    }
}

/// Length in bytes of the run of ASCII digits at the start of `s`.
///
/// # Example
///
/// ```
/// use veld_lex::ascii::digits_len;
///
/// assert_eq!(digits_len("123abc"), 3);
/// assert_eq!(digits_len("abc"), 0);
/// ```
pub fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_len_stops_at_non_ascii() {
        assert_eq!(ident_len("abcé"), 3);
        assert_eq!(ident_len("é"), 0);
    }

    #[test]
    fn test_ident_len_empty() {
        assert_eq!(ident_len(""), 0);
    }

    #[test]
    fn test_ident_len_underscore_only() {
        assert_eq!(ident_len("_"), 1);
        assert_eq!(ident_len("__ a"), 2);
    }

    #[test]
    fn test_digits_len() {
        assert_eq!(digits_len(""), 0);
        assert_eq!(digits_len("007."), 3);
    }

    #[test]
    fn test_non_ascii_is_never_ident() {
        for c in ['α', 'é', '中', '\u{FEFF}'] {
            assert!(!is_ident_start(c));
            assert!(!is_ident_continue(c));
        }
    }
}
