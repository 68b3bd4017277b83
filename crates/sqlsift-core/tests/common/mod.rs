#![allow(dead_code)]

use sqlsift_core::ast::{Comparator, Comparison, Condition, Literal, Query};
use sqlsift_core::{parse_query, Error, GrammarProfile};

pub fn parse(sql: &str) -> Query {
    parse_query(sql, &GrammarProfile::default())
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_strict(sql: &str) -> Query {
    parse_query(sql, &GrammarProfile::strict())
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> Error {
    parse_query(sql, &GrammarProfile::default())
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_err_strict(sql: &str) -> Error {
    parse_query(sql, &GrammarProfile::strict())
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn cmp(column: &str, op: Comparator, value: Literal) -> Condition {
    Comparison::new(column, op, value).into()
}

pub fn num(text: &str) -> Literal {
    Literal::Number(text.into())
}

pub fn string(content: &str) -> Literal {
    Literal::String(content.into())
}

pub fn ident(name: &str) -> Literal {
    Literal::Identifier(name.into())
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() re-parses to the same tree and the same string.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(ast1, ast2, "Re-parsed tree differs for: {rendered1}");
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
