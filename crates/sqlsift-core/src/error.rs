//! Top-level error type.

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Either stage of [`parse_query`](crate::parse_query) can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The query could not be tokenized.
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    /// The tokens do not form a valid statement.
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
        }
    }
}

/// Result type for query parsing.
pub type Result<T> = std::result::Result<T, Error>;
