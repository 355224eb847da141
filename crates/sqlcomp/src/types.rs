//! SQL verbs, comparison operators, and logical links.
//!
//! [`SqlOperation`] and [`CompareOp`] are closed sets with one escape hatch:
//! an `Unknown` variant holding text that did not match any known token. Typed
//! callers never produce it, but values parsed from strings or deserialized from
//! requests do, and they are rejected at the point of use by `is_valid()` /
//! `token()`.
//!
//! # Example
//! ```ignore
//! use sqlcomp::{CompareOp, SqlOperation};
//!
//! assert_eq!(SqlOperation::Select.token()?, "SELECT");
//! assert_eq!("<>".parse::<CompareOp>().unwrap(), CompareOp::Ne);
//! assert!(CompareOp::from("~~*").is_valid().is_err());
//! # Ok::<(), sqlcomp::SqlError>(())
//! ```

use crate::error::{SqlError, SqlResult};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The SQL verb governing which clauses a statement gets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SqlOperation {
    #[default]
    Select,
    Update,
    Delete,
    /// Unrecognized verb from untyped input.
    Unknown(String),
}

impl SqlOperation {
    /// Fail unless this is one of the supported verbs.
    pub fn is_valid(&self) -> SqlResult<()> {
        self.token().map(|_| ())
    }

    /// Canonical SQL keyword for this verb.
    pub fn token(&self) -> SqlResult<&'static str> {
        match self {
            SqlOperation::Select => Ok("SELECT"),
            SqlOperation::Update => Ok("UPDATE"),
            SqlOperation::Delete => Ok("DELETE"),
            SqlOperation::Unknown(raw) => Err(SqlError::InvalidOperationKind(raw.clone())),
        }
    }
}

impl FromStr for SqlOperation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_uppercase().as_str() {
            "SELECT" => SqlOperation::Select,
            "UPDATE" => SqlOperation::Update,
            "DELETE" => SqlOperation::Delete,
            _ => SqlOperation::Unknown(s.to_string()),
        };
        Ok(op)
    }
}

impl From<&str> for SqlOperation {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<String> for SqlOperation {
    fn from(s: String) -> Self {
        SqlOperation::from(s.as_str())
    }
}

impl From<SqlOperation> for String {
    fn from(op: SqlOperation) -> Self {
        op.to_string()
    }
}

impl fmt::Display for SqlOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlOperation::Unknown(raw) => f.write_str(raw),
            known => f.write_str(known.token().unwrap_or_default()),
        }
    }
}

/// Comparison operator used by a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `ILIKE` (case-insensitive LIKE)
    Ilike,
    /// `IN`; the filter value carries the parenthesized list.
    In,
    /// `NOT IN`
    NotIn,
    /// Unrecognized operator from untyped input.
    Unknown(String),
}

impl CompareOp {
    /// Fail unless this is one of the supported operators.
    pub fn is_valid(&self) -> SqlResult<()> {
        self.token().map(|_| ())
    }

    /// Canonical SQL token for this operator.
    pub fn token(&self) -> SqlResult<&'static str> {
        match self {
            CompareOp::Eq => Ok("="),
            CompareOp::Ne => Ok("!="),
            CompareOp::Gt => Ok(">"),
            CompareOp::Gte => Ok(">="),
            CompareOp::Lt => Ok("<"),
            CompareOp::Lte => Ok("<="),
            CompareOp::Like => Ok("LIKE"),
            CompareOp::NotLike => Ok("NOT LIKE"),
            CompareOp::Ilike => Ok("ILIKE"),
            CompareOp::In => Ok("IN"),
            CompareOp::NotIn => Ok("NOT IN"),
            CompareOp::Unknown(raw) => Err(SqlError::InvalidOperator(raw.clone())),
        }
    }
}

impl FromStr for CompareOp {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        let op = match normalized.to_ascii_uppercase().as_str() {
            "=" | "==" => CompareOp::Eq,
            "!=" | "<>" => CompareOp::Ne,
            ">" => CompareOp::Gt,
            ">=" => CompareOp::Gte,
            "<" => CompareOp::Lt,
            "<=" => CompareOp::Lte,
            "LIKE" => CompareOp::Like,
            "NOT LIKE" => CompareOp::NotLike,
            "ILIKE" => CompareOp::Ilike,
            "IN" => CompareOp::In,
            "NOT IN" => CompareOp::NotIn,
            _ => CompareOp::Unknown(s.to_string()),
        };
        Ok(op)
    }
}

impl From<&str> for CompareOp {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<String> for CompareOp {
    fn from(s: String) -> Self {
        CompareOp::from(s.as_str())
    }
}

impl From<CompareOp> for String {
    fn from(op: CompareOp) -> Self {
        op.to_string()
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Unknown(raw) => f.write_str(raw),
            known => f.write_str(known.token().unwrap_or_default()),
        }
    }
}

/// Logical operator joining a filter to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Link {
    #[default]
    #[serde(alias = "and")]
    And,
    #[serde(alias = "or")]
    Or,
}

impl Link {
    pub fn token(self) -> &'static str {
        match self {
            Link::And => "AND",
            Link::Or => "OR",
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
