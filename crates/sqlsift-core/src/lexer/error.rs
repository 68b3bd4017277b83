//! Lexer error types.

/// A lexical error. Tokenization stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// End of input reached before the closing quote.
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString {
        /// The opening quote character.
        quote: char,
        /// Byte offset of the opening quote.
        position: usize,
    },
}

impl LexError {
    /// Byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position, .. } => *position,
        }
    }
}
