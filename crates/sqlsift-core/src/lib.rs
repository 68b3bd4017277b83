//! # sqlsift-core
//!
//! Lexer and recursive descent parser for a restricted SQL `SELECT` subset.
//!
//! This crate provides:
//! - A hand-written lexer producing an EOF-terminated token sequence
//! - A recursive descent parser with AND/OR precedence encoded in the grammar
//! - A diagnostic formatter for the resulting parse tree
//!
//! The accepted grammar is
//!
//! ```text
//! query       := SELECT ( '*' | id_list ) FROM id_list
//!                [ WHERE condition ]
//!                [ GROUP BY id_list [ HAVING condition ] ]
//!                [ ORDER BY order_item ( ',' order_item )* ]
//!                [ ';' ]
//! condition   := conjunction ( OR conjunction )*
//! conjunction := comparison ( AND comparison )*
//! comparison  := IDENTIFIER ( '=' | '<>' | '<' | '>' | '<=' | '>=' )
//!                ( IDENTIFIER | NUMBER | STRING )
//! order_item  := IDENTIFIER [ ASC | DESC ]
//! ```
//!
//! Whether the trailing `;` is mandatory and which quote characters delimit
//! strings is decided by a [`GrammarProfile`].
//!
//! ## Parsing
//!
//! ```rust
//! use sqlsift_core::ast::{Condition, Connective, SelectList};
//! use sqlsift_core::{parse_query, GrammarProfile};
//!
//! let query = parse_query(
//!     "SELECT name, age FROM users WHERE status = 'active' OR age > 30;",
//!     &GrammarProfile::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     query.columns,
//!     SelectList::Columns(vec!["name".into(), "age".into()])
//! );
//! assert!(matches!(
//!     query.where_clause,
//!     Some(Condition::Binary { op: Connective::Or, .. })
//! ));
//! ```
//!
//! ## Errors
//!
//! The first problem aborts the whole call:
//!
//! ```rust
//! use sqlsift_core::{parse_query, Error, GrammarProfile};
//!
//! let err = parse_query("SELECT FROM t;", &GrammarProfile::default()).unwrap_err();
//! assert!(matches!(err, Error::Parse(_)));
//! assert_eq!(err.position(), 7);
//! ```

pub mod ast;
pub mod error;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod profile;

pub use ast::{Condition, Query};
pub use error::{Error, Result};
pub use format::format_query;
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};
pub use profile::{GrammarProfile, QuoteStyle};

/// Tokenizes `sql` with the default profile.
///
/// # Errors
///
/// Returns the first [`LexError`].
pub fn tokenize(sql: &str) -> std::result::Result<Vec<Token>, LexError> {
    tokenize_with(sql, &GrammarProfile::default())
}

/// Tokenizes `sql` under `profile`.
///
/// # Errors
///
/// Returns the first [`LexError`].
pub fn tokenize_with(
    sql: &str,
    profile: &GrammarProfile,
) -> std::result::Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(sql, profile).tokenize()?;
    tracing::debug!(count = tokens.len(), "tokenized query");
    Ok(tokens)
}

/// Parses a token sequence produced by the lexer.
///
/// # Errors
///
/// Returns the first [`ParseError`].
pub fn parse(tokens: &[Token], profile: &GrammarProfile) -> std::result::Result<Query, ParseError> {
    Parser::new(tokens, profile).parse_query()
}

/// Tokenizes and parses `sql` under `profile`.
///
/// # Errors
///
/// Returns [`Error::Lex`] or [`Error::Parse`] for the first problem found.
pub fn parse_query(sql: &str, profile: &GrammarProfile) -> Result<Query> {
    let tokens = tokenize_with(sql, profile)?;
    Ok(parse(&tokens, profile)?)
}
