//! SQL Parser
//!
//! A hand-written recursive descent parser. AND/OR precedence is encoded in
//! the grammar: a condition is a list of OR-joined conjunctions, and each
//! conjunction a list of AND-joined comparisons.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::{Expected, ParseError};
pub use parser::Parser;
