//! Condition trees for WHERE and HAVING.

use std::fmt;

use serde::Serialize;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl Comparator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connectives joining two conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// Returns the SQL representation of the connective.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Literal {
    /// Another column, e.g. `a = b`.
    Identifier(String),
    /// Numeric literal, kept as written (`007`, `1.50`).
    Number(String),
    /// String literal content without the quotes.
    String(String),
}

impl Literal {
    /// Picks a quote character that does not occur in `content`.
    ///
    /// Strings are not escaped, so content holding both quote characters
    /// cannot be rendered back; `'` is used in that case.
    #[must_use]
    pub fn quote_for(content: &str) -> char {
        if content.contains('\'') && !content.contains('"') {
            '"'
        } else {
            '\''
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::Number(text) => f.write_str(text),
            Self::String(content) => {
                let quote = Self::quote_for(content);
                write!(f, "{quote}{content}{quote}")
            }
        }
    }
}

/// A single `column operator literal` test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Comparison {
    /// Column on the left-hand side.
    pub column: String,
    /// Operator.
    pub op: Comparator,
    /// Right-hand side.
    pub value: Literal,
}

impl Comparison {
    /// Creates a new comparison.
    #[must_use]
    pub fn new(column: impl Into<String>, op: Comparator, value: Literal) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.value)
    }
}

/// A boolean condition tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    /// Leaf.
    Comparison(Comparison),

    /// Two conditions joined by AND or OR.
    Binary {
        /// Left operand.
        left: Box<Condition>,
        /// Connective.
        op: Connective,
        /// Right operand.
        right: Box<Condition>,
    },
}

impl Condition {
    /// Joins two conditions with `op`.
    #[must_use]
    pub fn binary(left: Self, op: Connective, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Shorthand for `binary(left, Connective::And, right)`.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(left, Connective::And, right)
    }

    /// Shorthand for `binary(left, Connective::Or, right)`.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(left, Connective::Or, right)
    }

    /// Returns the leaf comparisons from left to right.
    #[must_use]
    pub fn comparisons(&self) -> Vec<&Comparison> {
        let mut out = Vec::new();
        self.collect_comparisons(&mut out);
        out
    }

    fn collect_comparisons<'a>(&'a self, out: &mut Vec<&'a Comparison>) {
        match self {
            Self::Comparison(cmp) => out.push(cmp),
            Self::Binary { left, right, .. } => {
                left.collect_comparisons(out);
                right.collect_comparisons(out);
            }
        }
    }

    /// Height of the tree; a single comparison has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Comparison(_) => 1,
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl From<Comparison> for Condition {
    fn from(cmp: Comparison) -> Self {
        Self::Comparison(cmp)
    }
}

/// Renders the condition as SQL without parentheses. The output re-parses to
/// the same tree only for trees the parser itself produces (left-folded,
/// AND below OR).
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(cmp) => write!(f, "{cmp}"),
            Self::Binary { left, op, right } => write!(f, "{left} {op} {right}"),
        }
    }
}
