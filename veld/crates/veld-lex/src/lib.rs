//! veld-lex - Lexical Analyzer for the veld language
//!
//! This crate turns source text into a sequence of classified tokens for
//! the parser. Each [`Token`] carries its [`TokenKind`], the exact source
//! text it covers, and its [`Span`](veld_util::Span).
//!
//! # Example Usage
//!
//! ```
//! use veld_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("let mut x := 12.5 + count -- init").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Let,
//!         TokenKind::Mut,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Float,
//!         TokenKind::Plus,
//!         TokenKind::Identifier,
//!         TokenKind::LineComment,
//!     ]
//! );
//! ```
//!
//! With a configuration and a diagnostic handler:
//!
//! ```
//! use veld_lex::{tokenize_with, LexerConfig};
//! use veld_util::Handler;
//!
//! let mut handler = Handler::new();
//! let config = LexerConfig::from_toml_str("keep_comments = false").unwrap();
//! let tokens = tokenize_with("x := 1 $ -- note", &config, &mut handler).unwrap();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and tokens
//! - [`tables`] - Keyword, symbol and primitive type tables
//! - [`lexer`] - Recognizers and the dispatch loop
//! - [`cursor`] - Position tracking over the source buffer
//! - [`config`] - Lexer configuration
//! - [`error`] - Lexical errors
//! - [`literal`] - Literal value decoding
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `async module import from required optional struct class abs impl enum
//! fn let mut getter setter get set if elif else match for while loop ret
//! break continue true false nil as is in of except super this`
//!
//! Table spellings are matched as the longest prefix of the input, so
//! `format` lexes as `for` then `mat`. Set
//! [`LexerConfig::word_boundaries`] to keep such names whole.
//!
//! ## Operators and Punctuation
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `//`
//! - **Assignment**: `:=`, `+=`, `-=`, `*=`, `/=`, `%=`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `and`, `or`, `not`
//! - **Other**: `=>`, `->`, `..`, `:`, `,`, `.`, `;`, `()`, `{}`, `[]`
//!
//! ## Types
//!
//! `u8 u16 u32 u64 i8 i16 i32 i64 f32 f64 bool char str int uint float`,
//! and custom type names starting with an uppercase letter (`Point`).
//!
//! ## Literals, Names and Comments
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`, `1e10`, `2.5e-3`
//! - **String**: `"hello"`, `'world'` (no escapes, single line)
//! - **Identifier**: `count`, `_tmp`, `helloWorld`
//! - **Decorator**: `@override`
//! - **Line comment**: `-- to end of line`

pub mod ascii;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod literal;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

use tracing::debug;
use veld_util::Handler;

// Re-export main types for convenience
pub use config::{ConfigError, LexMode, LexerConfig};
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{Lexer, Recognizer, RecognizerMatch};
pub use literal::{Literal, LiteralError};
pub use token::{Token, TokenKind};

/// Tokenizes `source` with the default configuration.
///
/// Lexical errors are skipped; use [`tokenize_with`] to see them.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut handler = Handler::new();
    tokenize_with(source, &LexerConfig::default(), &mut handler)
}

/// Tokenizes `source`, reporting lenient-mode errors to `handler`.
///
/// In strict mode the first lexical error is returned instead.
pub fn tokenize_with<'a>(
    source: &'a str,
    config: &LexerConfig,
    handler: &mut Handler,
) -> Result<Vec<Token<'a>>, LexError> {
    debug!(bytes = source.len(), mode = ?config.mode, "tokenize started");

    let result: Result<Vec<_>, _> = Lexer::with_config(source, config.clone(), handler).collect();

    match &result {
        Ok(tokens) => debug!(
            tokens = tokens.len(),
            errors = handler.error_count(),
            "tokenize finished"
        ),
        Err(error) => debug!(%error, "tokenize aborted"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_end_to_end_statement() {
        assert_eq!(
            lex_all("let mut x := 12.5 + count -- init"),
            vec![
                (TokenKind::Let, "let"),
                (TokenKind::Mut, "mut"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Assign, ":="),
                (TokenKind::Float, "12.5"),
                (TokenKind::Plus, "+"),
                (TokenKind::Identifier, "count"),
                (TokenKind::LineComment, "-- init"),
            ]
        );
    }

    #[test]
    fn test_function_declaration() {
        let source = r#"
            @inline
            fn add(a: int, b: int) -> int {
                ret a + b
            }
        "#;
        let kinds: Vec<_> = lex_all(source).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Decorator,
                TokenKind::Function,
                TokenKind::Identifier,
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::IntType,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::IntType,
                TokenKind::CloseParenthesis,
                TokenKind::Arrow,
                TokenKind::IntType,
                TokenKind::OpenBrace,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_class_declaration() {
        let source = "abs class Shape impl Drawable {\n  getter area: f64\n}";
        let tokens = lex_all(source);
        assert_eq!(tokens[0], (TokenKind::Abstract, "abs"));
        assert_eq!(tokens[1], (TokenKind::Class, "class"));
        assert_eq!(tokens[2], (TokenKind::Type, "Shape"));
        assert_eq!(tokens[3], (TokenKind::Implements, "impl"));
        assert_eq!(tokens[4], (TokenKind::Type, "Drawable"));
        assert_eq!(tokens[6], (TokenKind::Getter, "getter"));
        assert_eq!(tokens[9], (TokenKind::F64Type, "f64"));
    }

    #[test]
    fn test_match_expression() {
        let source = "match n {\n  0 => 'zero'\n  1..9 => \"small\"\n}";
        let kinds: Vec<_> = lex_all(source).into_iter().map(|(k, _)| k).collect();
        assert!(kinds.contains(&TokenKind::Match));
        assert!(kinds.contains(&TokenKind::MatchArrow));
        assert!(kinds.contains(&TokenKind::Range));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::String).count(), 2);
    }

    #[test]
    fn test_loops_and_conditionals() {
        let source = "for i in 0..10 {\n if i % 2 == 0 { continue } elif not done { break }\n}";
        let tokens = lex_all(source);
        for kind in [
            TokenKind::For,
            TokenKind::In,
            TokenKind::Range,
            TokenKind::If,
            TokenKind::Modulo,
            TokenKind::Equal,
            TokenKind::Continue,
            TokenKind::Elif,
            TokenKind::Not,
            TokenKind::Break,
        ] {
            assert!(tokens.iter().any(|(k, _)| *k == kind), "missing {kind}");
        }
    }

    #[test]
    fn test_module_import() {
        assert_eq!(
            lex_all("from math import sqrt as root"),
            vec![
                (TokenKind::From, "from"),
                (TokenKind::Identifier, "math"),
                (TokenKind::Import, "import"),
                (TokenKind::Identifier, "sqrt"),
                (TokenKind::As, "as"),
                (TokenKind::Identifier, "root"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_only() {
        assert!(lex_all("\n   \n\t\n").is_empty());
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_tokenize_with_strict() {
        let mut handler = Handler::new();
        let err = tokenize_with("x := 'abc", &LexerConfig::strict(), &mut handler).unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { quote: '\'', .. }));
    }

    #[test]
    fn test_tokenize_with_reports_to_handler() {
        let mut handler = Handler::new();
        let tokens = tokenize_with("a ! b", &LexerConfig::default(), &mut handler).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(handler.error_count(), 1);
        assert!(handler.diagnostics()[0].to_string().contains("'!'"));
    }

    #[test]
    fn test_tokens_outlive_handler() {
        let tokens = {
            let mut handler = Handler::new();
            tokenize_with("a b", &LexerConfig::default(), &mut handler).unwrap()
        };
        assert_eq!(tokens.len(), 2);
    }
}
