//! Token definitions for the veld lexer.
//!
//! [`TokenKind`] is the closed set of lexical categories. Every kind has a
//! unique SCREAMING_SNAKE display name, produced by an exhaustive `match`.
//! [`Token`] pairs a kind with the exact source text it was scanned from and
//! the span where that text starts.

use std::fmt;

use serde::{Serialize, Serializer};
use veld_util::Span;

macro_rules! token_kinds {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        /// Lexical category of a token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            $($(#[$meta])* $variant,)*
        }

        impl TokenKind {
            /// Every category, in declaration order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Returns the display name used in diagnostics and token dumps.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }
        }
    };
}

token_kinds! {
    // Textual
    /// End of input marker, only emitted when configured
    Eof => "EOF",
    /// Line break, only emitted when configured
    Newline => "NEWLINE",
    OpenParenthesis => "OPEN_PARENTHESIS",
    CloseParenthesis => "CLOSE_PARENTHESIS",
    OpenBrace => "OPEN_BRACE",
    CloseBrace => "CLOSE_BRACE",
    OpenBracket => "OPEN_BRACKET",
    CloseBracket => "CLOSE_BRACKET",
    Comma => "COMMA",
    Colon => "COLON",
    Period => "PERIOD",
    Semicolon => "SEMICOLON",
    Plus => "PLUS",
    Minus => "MINUS",
    Multiply => "MULTIPLY",
    Divide => "DIVIDE",
    Modulo => "MODULO",
    IntDivide => "INT_DIVIDE",

    Identifier => "IDENTIFIER",

    // Literals
    Integer => "INTEGER",
    Float => "FLOAT",
    String => "STRING",
    True => "TRUE",
    False => "FALSE",
    Nil => "NIL",

    // Comments
    LineComment => "LINE_COMMENT",
    /// Reserved; block comments are not scanned
    BlockComment => "BLOCK_COMMENT",

    // Structures
    Enum => "ENUM",
    Struct => "STRUCT",
    Required => "REQUIRED",

    // Classes
    Class => "CLASS",
    Abstract => "ABSTRACT",
    Implements => "IMPLEMENTS",
    Get => "GET",
    Set => "SET",
    Getter => "GETTER",
    Setter => "SETTER",
    Of => "OF",
    As => "AS",
    Super => "SUPER",
    Is => "IS",
    /// `@name`
    Decorator => "DECORATOR",
    This => "THIS",

    // Functions
    Function => "FUNCTION",
    Arrow => "ARROW",
    Return => "RETURN",
    Async => "ASYNC",

    // Modules
    Module => "MODULE",
    Import => "IMPORT",
    From => "FROM",

    // Loops
    For => "FOR",
    Break => "BREAK",
    Continue => "CONTINUE",
    In => "IN",
    Range => "RANGE",
    While => "WHILE",
    Loop => "LOOP",

    // Conditionals
    If => "IF",
    Elif => "ELIF",
    Else => "ELSE",
    Match => "MATCH",
    MatchArrow => "MATCH_ARROW",

    // Declarations
    Mut => "MUT",
    Let => "LET",

    // Types
    /// Custom type name: an identifier starting with an uppercase letter
    Type => "TYPE",
    U8Type => "U8_TYPE",
    U16Type => "U16_TYPE",
    U32Type => "U32_TYPE",
    U64Type => "U64_TYPE",
    I8Type => "I8_TYPE",
    I16Type => "I16_TYPE",
    I32Type => "I32_TYPE",
    I64Type => "I64_TYPE",
    F32Type => "F32_TYPE",
    F64Type => "F64_TYPE",
    BoolType => "BOOL_TYPE",
    CharType => "CHAR_TYPE",
    StrType => "STR_TYPE",
    IntType => "INT_TYPE",
    UintType => "UINT_TYPE",
    FloatType => "FLOAT_TYPE",

    // Assignments
    Assign => "ASSIGN",
    PlusAssign => "PLUS_ASSIGN",
    MinusAssign => "MINUS_ASSIGN",
    MultiplyAssign => "MULTIPLY_ASSIGN",
    DivideAssign => "DIVIDE_ASSIGN",
    ModuloAssign => "MODULO_ASSIGN",

    // Comparisons
    Equal => "EQUAL",
    NotEqual => "NOT_EQUAL",
    Greater => "GREATER",
    GreaterEqual => "GREATER_EQUAL",
    Less => "LESS",
    LessEqual => "LESS_EQUAL",
    And => "AND",
    Or => "OR",
    Not => "NOT",

    // Optionals
    Optional => "OPTIONAL",
    Error => "ERROR",
    Except => "EXCEPT",

    /// Text skipped during error recovery
    Invalid => "INVALID",
}

impl TokenKind {
    /// Returns true for categories spelled by a reserved word.
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_lex::TokenKind;
    ///
    /// assert!(TokenKind::Function.is_keyword());
    /// assert!(TokenKind::Elif.is_keyword());
    /// assert!(!TokenKind::Identifier.is_keyword());
    /// ```
    pub const fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Async
                | Module
                | Import
                | From
                | Required
                | Optional
                | Struct
                | Class
                | Abstract
                | Implements
                | Enum
                | Function
                | Let
                | Mut
                | Getter
                | Setter
                | Get
                | Set
                | If
                | Elif
                | Else
                | Match
                | For
                | While
                | Loop
                | Return
                | Break
                | Continue
                | True
                | False
                | Nil
                | As
                | Is
                | In
                | Of
                | Except
                | Super
                | This
        )
    }

    /// Returns true for literal values, including `true`, `false` and `nil`.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
        )
    }

    /// Returns true for the built-in type names (`u8` through `float`).
    pub const fn is_primitive_type(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            U8Type
                | U16Type
                | U32Type
                | U64Type
                | I8Type
                | I16Type
                | I32Type
                | I64Type
                | F32Type
                | F64Type
                | BoolType
                | CharType
                | StrType
                | IntType
                | UintType
                | FloatType
        )
    }

    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Returns true if a token of this kind displays its source text rather
    /// than its category name.
    pub const fn displays_text(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::String
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Identifier
                | TokenKind::Type
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified piece of source text.
///
/// `text` borrows from the scanned source. For table-driven kinds it equals
/// the table spelling; for everything else it is the matched text, quotes
/// and comment markers included.
///
/// # Examples
///
/// ```
/// use veld_lex::{Token, TokenKind};
/// use veld_util::Span;
///
/// let token = Token::new(TokenKind::Identifier, "count", Span::new(0, 5, 1, 1));
/// assert_eq!(token.to_string(), "count");
///
/// let token = Token::new(TokenKind::Let, "let", Span::new(0, 3, 1, 1));
/// assert_eq!(token.to_string(), "LET");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.displays_text() {
            f.write_str(self.text)
        } else {
            f.write_str(self.kind.name())
        }
    }
}
