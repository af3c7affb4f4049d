//! Lexer configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration and matches [`LexerConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tables::PrefixRule;

/// How lexical errors are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexMode {
    /// The first error stops tokenization and is returned.
    Strict,
    /// Errors are reported to the handler and scanning continues.
    #[default]
    Lenient,
}

/// Lexer configuration.
///
/// # Examples
///
/// ```
/// use veld_lex::{LexMode, LexerConfig};
///
/// let config = LexerConfig::from_toml_str("mode = \"strict\"\nemit_newlines = true").unwrap();
/// assert_eq!(config.mode, LexMode::Strict);
/// assert!(config.emit_newlines);
/// assert!(config.keep_comments);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Error handling mode.
    #[serde(default)]
    pub mode: LexMode,

    /// Emit `LINE_COMMENT` tokens. When false they are dropped.
    #[serde(default = "default_true")]
    pub keep_comments: bool,

    /// Emit a `NEWLINE` token at the end of every line that produced a token.
    #[serde(default)]
    pub emit_newlines: bool,

    /// Append an `EOF` token with empty text.
    #[serde(default)]
    pub emit_eof: bool,

    /// In lenient mode, emit an `INVALID` token for text skipped by error
    /// recovery.
    #[serde(default)]
    pub emit_invalid_tokens: bool,

    /// Only match a keyword, word operator or type name when it is not
    /// followed by another identifier character. Off by default, where
    /// `format` lexes as `for` then `mat`.
    #[serde(default)]
    pub word_boundaries: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            mode: LexMode::default(),
            keep_comments: true,
            emit_newlines: false,
            emit_eof: false,
            emit_invalid_tokens: false,
            word_boundaries: false,
        }
    }
}

/// Errors from reading or writing a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize lexer configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl LexerConfig {
    /// Creates a strict configuration with every other field defaulted.
    pub fn strict() -> Self {
        Self {
            mode: LexMode::Strict,
            ..Self::default()
        }
    }

    /// The table lookup rule selected by `word_boundaries`.
    pub fn prefix_rule(&self) -> PrefixRule {
        if self.word_boundaries {
            PrefixRule::WholeWord
        } else {
            PrefixRule::Longest
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders this configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
