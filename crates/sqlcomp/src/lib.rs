//! # sqlcomp
//!
//! Build SELECT / UPDATE / DELETE statements against a table whose columns are
//! discovered at runtime.
//!
//! ## Features
//!
//! - **Schema-checked building**: columns and filter columns are validated
//!   against the table's discovered columns
//! - **Closed operator sets**: verbs and comparison operators are enums with an
//!   explicit `Unknown` fallback for untyped input
//! - **One round-trip**: discovery is the only database call; rendering is pure
//! - **Observable**: discovery and rendering emit `tracing` events under the
//!   `sqlcomp.schema` and `sqlcomp.sql` targets
//!
//! Filter values are raw SQL text and are **not** bound as parameters. Never
//! pass untrusted input as a filter value.
//!
//! ## Example
//!
//! ```ignore
//! use sqlcomp::{Filter, SqlQuery};
//!
//! let mut query = SqlQuery::init(&client, "campus", "people").await?;
//! query.add_column("first_name")?;
//! query.add_filter(Filter::gt("admission_year", "2019"))?;
//! let sql = query.render_query()?;
//! // SELECT first_name FROM people WHERE admission_year > 2019;
//! ```

pub mod columns;
pub mod error;
pub mod filter;
pub mod ident;
pub mod model;
pub mod prelude;
pub mod query;
pub mod row;
pub mod schema;
pub mod types;
pub mod writer;

pub use columns::{ALL_COLUMNS, ColumnRegistry};
pub use error::{SqlError, SqlResult};
pub use filter::Filter;
pub use model::Person;
pub use query::{Assignment, SqlQuery};
pub use row::{FromRow, RowExt};
pub use schema::{
    DiscoveryConfig, DiscoveryStrategy, PgQuery, PgSchemaSource, SchemaSource, StaticSchema,
};
pub use types::{CompareOp, Link, SqlOperation};
pub use writer::SqlWriter;
