//! Parser error types.

use std::fmt;

use crate::lexer::{Token, TokenKind};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One specific token kind.
    Token(TokenKind),
    /// Any comparison operator.
    Comparator,
    /// An identifier, number or string on the right of a comparison.
    Literal,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Comparator => f.write_str("comparison operator"),
            Self::Literal => f.write_str("IDENTIFIER, NUMBER or STRING"),
        }
    }
}

impl From<TokenKind> for Expected {
    fn from(kind: TokenKind) -> Self {
        Self::Token(kind)
    }
}

/// A parse error. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The current token does not fit the grammar.
    #[error("expected {expected}, found {found} at position {position}")]
    UnexpectedToken {
        /// What the grammar allows here.
        expected: Expected,
        /// Kind of the offending token.
        found: TokenKind,
        /// Text of the offending token.
        text: String,
        /// Byte offset of the offending token.
        position: usize,
    },

    /// The statement ended but input remains.
    #[error("unexpected {found} after end of statement at position {position}")]
    TrailingTokens {
        /// Kind of the first leftover token.
        found: TokenKind,
        /// Text of the first leftover token.
        text: String,
        /// Byte offset of the first leftover token.
        position: usize,
    },
}

impl ParseError {
    /// Creates an "unexpected token" error for `found`.
    #[must_use]
    pub fn unexpected(expected: impl Into<Expected>, found: &Token) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.kind,
            text: found.text.clone(),
            position: found.position(),
        }
    }

    /// Creates a "trailing tokens" error for `found`.
    #[must_use]
    pub fn trailing(found: &Token) -> Self {
        Self::TrailingTokens {
            found: found.kind,
            text: found.text.clone(),
            position: found.position(),
        }
    }

    /// Byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. } | Self::TrailingTokens { position, .. } => {
                *position
            }
        }
    }

    /// Kind of the token that caused the error.
    #[must_use]
    pub const fn found(&self) -> TokenKind {
        match self {
            Self::UnexpectedToken { found, .. } | Self::TrailingTokens { found, .. } => *found,
        }
    }
}
