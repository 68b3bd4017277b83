//! Grammar profiles.
//!
//! Deployments of the SELECT subset disagree on whether the trailing `;` is
//! mandatory and on which quote characters delimit string literals. A
//! [`GrammarProfile`] pins those choices down. It is a plain `Copy` value:
//! build it once and hand it to the lexer and the parser by reference.

use serde::Serialize;

/// Characters accepted as string literal delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum QuoteStyle {
    /// Only `'...'`.
    Single,
    /// Only `"..."`.
    Double,
    /// Both `'...'` and `"..."`.
    #[default]
    Both,
}

impl QuoteStyle {
    /// Returns true if `c` opens a string literal under this style.
    #[must_use]
    pub const fn accepts(self, c: char) -> bool {
        match self {
            Self::Single => c == '\'',
            Self::Double => c == '"',
            Self::Both => c == '\'' || c == '"',
        }
    }
}

/// Grammar switches shared by the lexer and the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrammarProfile {
    /// Whether the statement must end with `;`.
    pub semicolon_required: bool,
    /// Accepted string delimiters.
    pub quotes: QuoteStyle,
}

impl GrammarProfile {
    /// Terminator optional, both quote characters accepted.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            semicolon_required: false,
            quotes: QuoteStyle::Both,
        }
    }

    /// Terminator required, both quote characters accepted.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            semicolon_required: true,
            quotes: QuoteStyle::Both,
        }
    }

    /// Returns a copy with the terminator requirement replaced.
    #[must_use]
    pub const fn with_semicolon_required(self, semicolon_required: bool) -> Self {
        Self {
            semicolon_required,
            ..self
        }
    }

    /// Returns a copy with the quote style replaced.
    #[must_use]
    pub const fn with_quotes(self, quotes: QuoteStyle) -> Self {
        Self { quotes, ..self }
    }
}

impl Default for GrammarProfile {
    fn default() -> Self {
        Self::lenient()
    }
}
