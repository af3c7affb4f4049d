//! veld-util - Shared foundation types for the veld front end
//!
//! This crate holds the types every front-end phase agrees on:
//!
//! - [`Span`]: byte range plus the line/column where it starts
//! - [`Diagnostic`] and [`Handler`]: error reporting with codes, help messages
//!   and source snippets
//!
//! # Examples
//!
//! ```
//! use veld_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(9, 10, 1, 10))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;
