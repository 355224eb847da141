//! Single WHERE predicates.
//!
//! A [`Filter`] renders to `<column> <operator> <value>`. The value is raw SQL
//! text and is emitted as-is, so string literals must carry their own quotes:
//!
//! ```ignore
//! use sqlcomp::Filter;
//!
//! let f = Filter::eq("status", "'active'").or();
//! assert_eq!(f.render_expression()?, "status = 'active'");
//! # Ok::<(), sqlcomp::SqlError>(())
//! ```
//!
//! The [`Link`] of a filter describes how it joins the filter *before* it; the
//! containing query decides where links are written.

use crate::error::SqlResult;
use crate::types::{CompareOp, Link};
use serde::{Deserialize, Serialize};

/// A comparison predicate plus the logical link to the previous predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub op: CompareOp,
    pub value: String,
    #[serde(default)]
    pub link: Link,
}

impl Filter {
    /// Create a filter linked with AND.
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
            link: Link::And,
        }
    }

    /// column = value
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Eq, value)
    }

    /// column != value
    pub fn ne(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Ne, value)
    }

    /// column > value
    pub fn gt(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Gt, value)
    }

    /// column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Gte, value)
    }

    /// column < value
    pub fn lt(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Lt, value)
    }

    /// column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Lte, value)
    }

    /// column LIKE pattern
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(column, CompareOp::Like, pattern)
    }

    /// Set the link to the previous filter.
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = link;
        self
    }

    /// Join to the previous filter with AND.
    pub fn and(self) -> Self {
        self.with_link(Link::And)
    }

    /// Join to the previous filter with OR.
    pub fn or(self) -> Self {
        self.with_link(Link::Or)
    }

    /// Render `<column> <operator> <value>`.
    pub fn render_expression(&self) -> SqlResult<String> {
        let op = self.op.token()?;
        Ok(format!("{} {} {}", self.column, op, self.value))
    }
}
