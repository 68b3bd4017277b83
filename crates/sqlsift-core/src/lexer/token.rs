//! Token types shared by the lexer and the parser.

use std::fmt;

use serde::Serialize;

use super::Span;

/// Reserved words of the SELECT subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Select,
    From,
    Where,
    And,
    Or,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
}

impl Keyword {
    /// Looks up a keyword, ignoring ASCII case.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Returns the canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// The kind of token. The matched text lives on [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Reserved word.
    Keyword(Keyword),
    /// Column or table name.
    Identifier,
    /// Decimal literal, e.g. `42` or `3.5`.
    Number,
    /// Quoted literal; the token text excludes the quotes.
    String,

    /// ,
    Comma,
    /// ;
    Semicolon,
    /// *
    Star,

    /// =
    Eq,
    /// <> or !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns true for the comparison operators.
    #[must_use]
    pub const fn is_comparator(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Returns the name used in diagnostics, e.g. `IDENTIFIER` or `GE`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keyword(kw) => kw.as_str(),
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Star => "ASTERISK",
            Self::Eq => "EQ",
            Self::NotEq => "NE",
            Self::Lt => "LT",
            Self::LtEq => "LE",
            Self::Gt => "GT",
            Self::GtEq => "GE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its text and location in the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Keywords carry their upper-case form, identifiers their original
    /// casing, strings their unquoted content. Empty for EOF.
    pub text: String,
    /// The location in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end-of-input sentinel at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::empty_at(offset),
        }
    }

    /// Byte offset where the token starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
