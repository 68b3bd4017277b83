//! The parse tree root.

use std::fmt;

use serde::Serialize;

use super::condition::Condition;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBy {
    /// The column to order by.
    pub column: String,
    /// The direction; ASC when not written.
    pub direction: OrderDirection,
}

impl OrderBy {
    /// Creates an entry with an explicit direction.
    #[must_use]
    pub fn new(column: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Creates an ascending entry.
    #[must_use]
    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, OrderDirection::Asc)
    }

    /// Creates a descending entry.
    #[must_use]
    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, OrderDirection::Desc)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_str())
    }
}

/// The projection of a SELECT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SelectList {
    /// `*`
    Wildcard,
    /// Named columns in the order written. Never empty.
    Columns(Vec<String>),
}

impl SelectList {
    /// Returns the named columns, or `None` for the wildcard.
    #[must_use]
    pub fn columns(&self) -> Option<&[String]> {
        match self {
            Self::Wildcard => None,
            Self::Columns(cols) => Some(cols),
        }
    }

    /// Returns true for `*`.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl fmt::Display for SelectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Columns(cols) => f.write_str(&cols.join(", ")),
        }
    }
}

/// A validated SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Projection.
    pub columns: SelectList,
    /// Tables in the FROM clause. Never empty.
    pub tables: Vec<String>,
    /// WHERE clause.
    pub where_clause: Option<Condition>,
    /// GROUP BY columns; empty when the clause is absent.
    pub group_by: Vec<String>,
    /// HAVING clause. Only present together with GROUP BY.
    pub having: Option<Condition>,
    /// ORDER BY entries; empty when the clause is absent.
    pub order_by: Vec<OrderBy>,
    /// Whether the statement ended with `;`.
    pub terminated: bool,
}

impl Query {
    /// Creates a query with only SELECT and FROM.
    #[must_use]
    pub const fn new(columns: SelectList, tables: Vec<String>) -> Self {
        Self {
            columns,
            tables,
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            terminated: false,
        }
    }
}

/// Renders the query as single-line SQL.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.columns, self.tables.join(", "))?;
        if let Some(cond) = &self.where_clause {
            write!(f, " WHERE {cond}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", self.group_by.join(", "))?;
            if let Some(cond) = &self.having {
                write!(f, " HAVING {cond}")?;
            }
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            for (i, item) in self.order_by.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
        }
        if self.terminated {
            f.write_str(";")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Comparator, Comparison, Literal};

    #[test]
    fn test_order_direction() {
        assert_eq!(OrderDirection::default(), OrderDirection::Asc);
        assert_eq!(OrderDirection::Desc.as_str(), "DESC");
    }

    #[test]
    fn test_select_list_accessors() {
        assert!(SelectList::Wildcard.is_wildcard());
        assert_eq!(SelectList::Wildcard.columns(), None);
        let cols = SelectList::Columns(vec!["b".into(), "a".into()]);
        assert_eq!(cols.columns(), Some(&["b".to_string(), "a".to_string()][..]));
    }

    #[test]
    fn test_display_minimal() {
        let query = Query::new(SelectList::Wildcard, vec!["users".into()]);
        assert_eq!(query.to_string(), "SELECT * FROM users");
    }

    #[test]
    fn test_display_all_clauses() {
        let mut query = Query::new(
            SelectList::Columns(vec!["dept".into(), "name".into()]),
            vec!["staff".into()],
        );
        query.where_clause = Some(
            Comparison::new("age", Comparator::Gt, Literal::Number("30".into())).into(),
        );
        query.group_by = vec!["dept".into()];
        query.having = Some(
            Comparison::new("dept", Comparator::NotEq, Literal::String("ops".into())).into(),
        );
        query.order_by = vec![OrderBy::asc("dept"), OrderBy::desc("name")];
        query.terminated = true;
        assert_eq!(
            query.to_string(),
            "SELECT dept, name FROM staff WHERE age > 30 GROUP BY dept \
             HAVING dept <> 'ops' ORDER BY dept ASC, name DESC;"
        );
    }
}
