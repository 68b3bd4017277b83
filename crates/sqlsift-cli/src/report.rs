//! Text rendering for the command outputs.

use sqlsift_core::{Error, Query, Token};

/// Printed for every query `check` accepts.
pub const VALID_MESSAGE: &str = "Valid SQL query!";

/// One line for the outcome of `check`.
pub fn check_line(result: &Result<Query, Error>) -> String {
    match result {
        Ok(_) => VALID_MESSAGE.to_string(),
        Err(Error::Lex(e)) => format!("Lexical error: {e}"),
        Err(Error::Parse(e)) => format!("Syntax error: {e}"),
    }
}

/// One line per token: `KIND 'text' @position`.
pub fn token_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{} '{}' @{}\n",
            token.kind,
            token.text,
            token.position()
        ));
    }
    out
}

/// Splits stdin content into queries for `check`: one per non-blank line.
pub fn split_queries(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
