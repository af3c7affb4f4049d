//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch loop and error recovery
//! - `recognizer` - Recognizer priority order
//! - `comment` - Line comments
//! - `string` - String literals
//! - `number` - Integer and float literals
//! - `table` - Keywords, symbols and type names
//! - `identifier` - Identifiers and decorators

mod comment;
mod core;
mod identifier;
mod number;
mod recognizer;
mod string;
mod table;

pub use core::Lexer;
pub use recognizer::{Recognizer, RecognizerMatch};
