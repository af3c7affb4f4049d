//! Static lexical tables.
//!
//! Three tables map exact spellings to token kinds: reserved words,
//! operators and punctuation, and built-in type names. Each table is built
//! once per process with its keys pre-sorted longest first, so a
//! longest-prefix lookup is a single linear pass with no per-call sorting.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::ascii::ident_len;
use crate::token::TokenKind;

/// How much of the input a table spelling has to cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrefixRule {
    /// The longest spelling that is a prefix of the input wins, so `format`
    /// starts with the keyword `for`.
    #[default]
    Longest,
    /// Word spellings must not be followed by another identifier character,
    /// so `format` is left whole for the identifier recognizer.
    WholeWord,
}

/// A read-only mapping from spellings to token kinds with longest-prefix
/// lookup.
///
/// # Examples
///
/// ```
/// use veld_lex::tables::SYMBOLS;
/// use veld_lex::TokenKind;
///
/// assert_eq!(SYMBOLS.longest_match("== x"), Some(("==", TokenKind::Equal)));
/// assert_eq!(SYMBOLS.longest_match("x"), None);
/// ```
pub struct LexicalTable {
    /// Entries ordered by descending spelling length.
    by_length: Vec<(&'static str, TokenKind)>,
    /// Exact spellings, for whole-word lookups.
    exact: FxHashMap<&'static str, TokenKind>,
}

impl LexicalTable {
    /// Builds a table from `(spelling, kind)` pairs.
    pub fn new(entries: &[(&'static str, TokenKind)]) -> Self {
        let mut by_length = entries.to_vec();
        by_length.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut exact = FxHashMap::default();
        exact.reserve(entries.len());
        for &(spelling, kind) in entries {
            exact.insert(spelling, kind);
        }

        Self { by_length, exact }
    }

    /// Returns the longest entry whose spelling is a prefix of `input`.
    pub fn longest_match(&self, input: &str) -> Option<(&'static str, TokenKind)> {
        self.by_length
            .iter()
            .copied()
            .find(|(spelling, _)| input.starts_with(spelling))
    }

    /// Like [`longest_match`](Self::longest_match), but a word spelling only
    /// matches the whole identifier-shaped run at the start of `input`.
    ///
    /// Every word spelling starts with a letter and every punctuation
    /// spelling with a non-identifier character, so a run of identifier
    /// characters is either a single exact entry or no entry at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use veld_lex::tables::KEYWORDS;
    /// use veld_lex::TokenKind;
    ///
    /// assert_eq!(KEYWORDS.longest_word_match("for x"), Some(("for", TokenKind::For)));
    /// assert_eq!(KEYWORDS.longest_word_match("format"), None);
    /// ```
    pub fn longest_word_match(&self, input: &str) -> Option<(&'static str, TokenKind)> {
        let word = ident_len(input);
        if word == 0 {
            return self.longest_match(input);
        }
        self.exact
            .get_key_value(&input[..word])
            .map(|(&spelling, &kind)| (spelling, kind))
    }

    /// Looks up the entry matching the start of `input` under `rule`.
    pub fn lookup(&self, input: &str, rule: PrefixRule) -> Option<(&'static str, TokenKind)> {
        match rule {
            PrefixRule::Longest => self.longest_match(input),
            PrefixRule::WholeWord => self.longest_word_match(input),
        }
    }

    /// Exact lookup of a spelling.
    pub fn get(&self, spelling: &str) -> Option<TokenKind> {
        self.exact.get(spelling).copied()
    }

    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Iterates entries longest spelling first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.by_length.iter().copied()
    }
}

const KEYWORD_ENTRIES: &[(&str, TokenKind)] = &[
    ("async", TokenKind::Async),
    ("module", TokenKind::Module),
    ("import", TokenKind::Import),
    ("from", TokenKind::From),
    ("required", TokenKind::Required),
    ("optional", TokenKind::Optional),
    ("struct", TokenKind::Struct),
    ("class", TokenKind::Class),
    ("abs", TokenKind::Abstract),
    ("impl", TokenKind::Implements),
    ("enum", TokenKind::Enum),
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("mut", TokenKind::Mut),
    ("getter", TokenKind::Getter),
    ("setter", TokenKind::Setter),
    ("get", TokenKind::Get),
    ("set", TokenKind::Set),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("match", TokenKind::Match),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("loop", TokenKind::Loop),
    ("ret", TokenKind::Return),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("nil", TokenKind::Nil),
    ("as", TokenKind::As),
    ("is", TokenKind::Is),
    ("in", TokenKind::In),
    ("of", TokenKind::Of),
    ("except", TokenKind::Except),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
];

const SYMBOL_ENTRIES: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Modulo),
    ("//", TokenKind::IntDivide),
    (":=", TokenKind::Assign),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::MultiplyAssign),
    ("/=", TokenKind::DivideAssign),
    ("%=", TokenKind::ModuloAssign),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    (">", TokenKind::Greater),
    (">=", TokenKind::GreaterEqual),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEqual),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("=>", TokenKind::MatchArrow),
    ("->", TokenKind::Arrow),
    ("..", TokenKind::Range),
    (":", TokenKind::Colon),
    (",", TokenKind::Comma),
    (".", TokenKind::Period),
    (";", TokenKind::Semicolon),
    ("(", TokenKind::OpenParenthesis),
    (")", TokenKind::CloseParenthesis),
    ("{", TokenKind::OpenBrace),
    ("}", TokenKind::CloseBrace),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
];

const PRIMITIVE_TYPE_ENTRIES: &[(&str, TokenKind)] = &[
    ("u8", TokenKind::U8Type),
    ("u16", TokenKind::U16Type),
    ("u32", TokenKind::U32Type),
    ("u64", TokenKind::U64Type),
    ("i8", TokenKind::I8Type),
    ("i16", TokenKind::I16Type),
    ("i32", TokenKind::I32Type),
    ("i64", TokenKind::I64Type),
    ("f32", TokenKind::F32Type),
    ("f64", TokenKind::F64Type),
    ("bool", TokenKind::BoolType),
    ("char", TokenKind::CharType),
    ("str", TokenKind::StrType),
    ("int", TokenKind::IntType),
    ("uint", TokenKind::UintType),
    ("float", TokenKind::FloatType),
];

/// Reserved words.
pub static KEYWORDS: LazyLock<LexicalTable> =
    LazyLock::new(|| LexicalTable::new(KEYWORD_ENTRIES));

/// Operators and punctuation, including the word operators `and`, `or` and `not`.
pub static SYMBOLS: LazyLock<LexicalTable> = LazyLock::new(|| LexicalTable::new(SYMBOL_ENTRIES));

/// Built-in type names.
pub static PRIMITIVE_TYPES: LazyLock<LexicalTable> =
    LazyLock::new(|| LexicalTable::new(PRIMITIVE_TYPE_ENTRIES));
