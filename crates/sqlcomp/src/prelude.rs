//! Convenient imports for typical `sqlcomp` usage.
//!
//! ```ignore
//! use sqlcomp::prelude::*;
//! ```

pub use crate::{
    ALL_COLUMNS, CompareOp, Filter, FromRow, Link, RowExt, SchemaSource, SqlError, SqlOperation,
    SqlQuery, SqlResult,
};
