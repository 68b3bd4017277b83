//! Parse tree types for the SELECT subset.

mod condition;
mod query;

pub use condition::{Comparator, Comparison, Condition, Connective, Literal};
pub use query::{OrderBy, OrderDirection, Query, SelectList};
