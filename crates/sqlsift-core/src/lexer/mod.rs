//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer that turns a query string into
//! a sequence of tokens terminated by a single EOF token.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
