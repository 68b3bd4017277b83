//! Diagnostic rendering of a parsed query.
//!
//! The output is meant for people, not for re-parsing: every present clause
//! gets its own line and condition trees are drawn one level of indentation
//! per nesting depth.
//!
//! ```
//! use sqlsift_core::{format_query, parse_query, GrammarProfile};
//!
//! let query = parse_query(
//!     "SELECT c FROM t WHERE a = 1 OR b = 2 AND c = 3;",
//!     &GrammarProfile::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     format_query(&query),
//!     "SELECT c\n\
//!      FROM t\n\
//!      WHERE\n  \
//!        OR\n    \
//!          a = 1\n    \
//!          AND\n      \
//!            b = 2\n      \
//!            c = 3\n"
//! );
//! ```

use crate::ast::{Condition, Query};

const INDENT: &str = "  ";

/// Renders `query` one clause per line.
#[must_use]
pub fn format_query(query: &Query) -> String {
    let mut out = String::new();
    out.push_str(&format!("SELECT {}\n", query.columns));
    out.push_str(&format!("FROM {}\n", query.tables.join(", ")));

    if let Some(cond) = &query.where_clause {
        out.push_str("WHERE\n");
        format_condition_into(&mut out, cond, 1);
    }
    // HAVING only exists under a GROUP BY.
    if !query.group_by.is_empty() {
        out.push_str(&format!("GROUP BY {}\n", query.group_by.join(", ")));
        if let Some(cond) = &query.having {
            out.push_str("HAVING\n");
            format_condition_into(&mut out, cond, 1);
        }
    }
    if !query.order_by.is_empty() {
        let items: Vec<String> = query.order_by.iter().map(ToString::to_string).collect();
        out.push_str(&format!("ORDER BY {}\n", items.join(", ")));
    }
    out
}

/// Renders a condition tree starting at indentation `depth`.
#[must_use]
pub fn format_condition(cond: &Condition, depth: usize) -> String {
    let mut out = String::new();
    format_condition_into(&mut out, cond, depth);
    out
}

fn format_condition_into(out: &mut String, cond: &Condition, depth: usize) {
    let pad = INDENT.repeat(depth);
    match cond {
        Condition::Comparison(cmp) => {
            out.push_str(&format!("{pad}{cmp}\n"));
        }
        Condition::Binary { left, op, right } => {
            out.push_str(&format!("{pad}{op}\n"));
            format_condition_into(out, left, depth + 1);
            format_condition_into(out, right, depth + 1);
        }
    }
}
