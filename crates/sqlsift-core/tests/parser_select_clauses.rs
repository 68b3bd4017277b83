//! Tests for SELECT clauses: WHERE, GROUP BY, HAVING and ORDER BY,
//! including AND/OR precedence inside conditions.

mod common;
use common::*;

use sqlsift_core::ast::{Comparator, Condition, Connective, OrderBy, OrderDirection};

#[test]
fn where_simple() {
    let q = parse("SELECT * FROM users WHERE id = 1");
    assert_eq!(q.where_clause, Some(cmp("id", Comparator::Eq, num("1"))));
    round_trip("SELECT * FROM users WHERE id = 1");
}

#[test]
fn where_string_literal_is_unquoted() {
    let q = parse("SELECT id, name FROM clients WHERE status = 'active'");
    assert_eq!(
        q.where_clause,
        Some(cmp("status", Comparator::Eq, string("active")))
    );
}

#[test]
fn where_double_quoted_string() {
    let q = parse("SELECT a FROM t WHERE note = \"it's\"");
    assert_eq!(q.where_clause, Some(cmp("note", Comparator::Eq, string("it's"))));
    round_trip("SELECT a FROM t WHERE note = \"it's\"");
}

#[test]
fn where_identifier_on_the_right() {
    let q = parse("SELECT a FROM t WHERE a <= b");
    assert_eq!(q.where_clause, Some(cmp("a", Comparator::LtEq, ident("b"))));
}

#[test]
fn where_decimal_number() {
    let q = parse("SELECT a FROM t WHERE price >= 19.99");
    assert_eq!(
        q.where_clause,
        Some(cmp("price", Comparator::GtEq, num("19.99")))
    );
}

#[test]
fn where_every_comparator() {
    for (sql_op, op) in [
        ("=", Comparator::Eq),
        ("<>", Comparator::NotEq),
        ("!=", Comparator::NotEq),
        ("<", Comparator::Lt),
        ("<=", Comparator::LtEq),
        (">", Comparator::Gt),
        (">=", Comparator::GtEq),
    ] {
        let q = parse(&format!("SELECT a FROM t WHERE a {sql_op} 1"));
        assert_eq!(q.where_clause, Some(cmp("a", op, num("1"))), "operator {sql_op}");
    }
}

#[test]
fn where_and_binds_tighter_than_or() {
    let q = parse("SELECT c FROM t WHERE a=1 OR b=2 AND c=3;");
    assert_eq!(
        q.where_clause,
        Some(Condition::or(
            cmp("a", Comparator::Eq, num("1")),
            Condition::and(
                cmp("b", Comparator::Eq, num("2")),
                cmp("c", Comparator::Eq, num("3")),
            ),
        ))
    );
    round_trip("SELECT c FROM t WHERE a=1 OR b=2 AND c=3;");
}

#[test]
fn where_and_before_or() {
    let q = parse("SELECT c FROM t WHERE a=1 AND b=2 OR c=3");
    assert_eq!(
        q.where_clause,
        Some(Condition::or(
            Condition::and(
                cmp("a", Comparator::Eq, num("1")),
                cmp("b", Comparator::Eq, num("2")),
            ),
            cmp("c", Comparator::Eq, num("3")),
        ))
    );
}

#[test]
fn where_and_chain_folds_left() {
    let q = parse("SELECT x FROM t WHERE a=1 AND b=2 AND c=3");
    assert_eq!(
        q.where_clause,
        Some(Condition::and(
            Condition::and(
                cmp("a", Comparator::Eq, num("1")),
                cmp("b", Comparator::Eq, num("2")),
            ),
            cmp("c", Comparator::Eq, num("3")),
        ))
    );
}

#[test]
fn where_or_chain_folds_left() {
    let q = parse("SELECT x FROM t WHERE a=1 OR b=2 OR c=3");
    let Some(Condition::Binary { left, op, right }) = &q.where_clause else {
        panic!("Expected binary condition");
    };
    assert_eq!(*op, Connective::Or);
    assert_eq!(**right, cmp("c", Comparator::Eq, num("3")));
    assert!(matches!(
        left.as_ref(),
        Condition::Binary {
            op: Connective::Or,
            ..
        }
    ));
}

#[test]
fn where_mixed_chain() {
    let q = parse("SELECT x FROM t WHERE a=1 AND b=2 OR c=3 AND d=4 OR e=5");
    let tree = q.where_clause.unwrap();
    let columns: Vec<_> = tree.comparisons().iter().map(|c| c.column.clone()).collect();
    assert_eq!(columns, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(
        tree,
        Condition::or(
            Condition::or(
                Condition::and(
                    cmp("a", Comparator::Eq, num("1")),
                    cmp("b", Comparator::Eq, num("2")),
                ),
                Condition::and(
                    cmp("c", Comparator::Eq, num("3")),
                    cmp("d", Comparator::Eq, num("4")),
                ),
            ),
            cmp("e", Comparator::Eq, num("5")),
        )
    );
    round_trip("SELECT x FROM t WHERE a=1 AND b=2 OR c=3 AND d=4 OR e=5");
}

#[test]
fn where_keywords_any_case() {
    let q = parse("select a from t where a = 1 or b = 2 and c = 3");
    assert_eq!(q.where_clause.map(|c| c.depth()), Some(3));
}

#[test]
fn group_by_single() {
    let q = parse("SELECT status FROM orders GROUP BY status");
    assert_eq!(q.group_by, vec!["status"]);
    assert!(q.having.is_none());
    round_trip("SELECT status FROM orders GROUP BY status");
}

#[test]
fn group_by_multiple() {
    let q = parse("SELECT status, region FROM orders GROUP BY status, region");
    assert_eq!(q.group_by, vec!["status", "region"]);
}

#[test]
fn having_after_group_by() {
    let q = parse("SELECT dept FROM staff GROUP BY dept HAVING dept <> 'ops' AND dept <> 'hr'");
    assert_eq!(
        q.having,
        Some(Condition::and(
            cmp("dept", Comparator::NotEq, string("ops")),
            cmp("dept", Comparator::NotEq, string("hr")),
        ))
    );
    round_trip("SELECT dept FROM staff GROUP BY dept HAVING dept <> 'ops' AND dept <> 'hr'");
}

#[test]
fn order_by_default_asc() {
    let q = parse("SELECT name FROM users ORDER BY name");
    assert_eq!(q.order_by, vec![OrderBy::asc("name")]);
    assert_eq!(q.order_by[0].direction, OrderDirection::Asc);
}

#[test]
fn order_by_mixed_directions() {
    let q = parse("SELECT name FROM users ORDER BY last DESC, first, age asc");
    assert_eq!(
        q.order_by,
        vec![OrderBy::desc("last"), OrderBy::asc("first"), OrderBy::asc("age")]
    );
    round_trip("SELECT name FROM users ORDER BY last DESC, first, age asc");
}

#[test]
fn all_clauses_together() {
    let sql = "SELECT dept, name FROM staff, depts \
               WHERE age > 30 OR title = 'lead' \
               GROUP BY dept HAVING dept = 'eng' \
               ORDER BY dept DESC;";
    let q = parse_strict(sql);
    assert_eq!(q.tables, vec!["staff", "depts"]);
    assert!(q.where_clause.is_some());
    assert_eq!(q.group_by, vec!["dept"]);
    assert!(q.having.is_some());
    assert_eq!(q.order_by, vec![OrderBy::desc("dept")]);
    assert!(q.terminated);
    round_trip(sql);
}

#[test]
fn order_by_without_group_by() {
    let q = parse("SELECT a FROM t WHERE a = 1 ORDER BY a;");
    assert!(q.group_by.is_empty());
    assert_eq!(q.order_by.len(), 1);
}
