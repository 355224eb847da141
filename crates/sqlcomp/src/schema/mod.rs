//! Schema discovery: "given a table, return its column names or fail".
//!
//! [`SchemaSource`] is the only place `sqlcomp` touches a database. It is
//! implemented for `tokio_postgres::Client` / `Transaction` (default
//! [`DiscoveryConfig`]), for [`PgSchemaSource`] (custom configuration), and for
//! [`StaticSchema`], an in-memory table map.
//!
//! Implementations report failures of the lookup call as
//! [`SqlError::SchemaLookup`](crate::SqlError::SchemaLookup) and undecodable rows
//! as [`SqlError::RecordRead`](crate::SqlError::RecordRead). An unknown table is
//! not an error at this level: it yields an empty list.

mod config;
mod postgres;

pub use config::{DiscoveryConfig, DiscoveryStrategy};
pub use postgres::{PgQuery, PgSchemaSource};

use crate::error::SqlResult;
use std::collections::HashMap;

/// A capability that lists the column names of a table.
pub trait SchemaSource: Send + Sync {
    /// Return the column names of `table` in `database`, in table order.
    fn discover_columns(
        &self,
        database: &str,
        table: &str,
    ) -> impl std::future::Future<Output = SqlResult<Vec<String>>> + Send;
}

/// In-memory schema keyed by table name. The database name is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    tables: HashMap<String, Vec<String>>,
}

impl StaticSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a table and its columns.
    pub fn table<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .insert(name.into(), columns.into_iter().map(Into::into).collect());
        self
    }
}

impl SchemaSource for StaticSchema {
    async fn discover_columns(&self, _database: &str, table: &str) -> SqlResult<Vec<String>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_schema_lists_registered_columns() {
        let schema = StaticSchema::new().table("people", ["id", "first_name"]);
        let cols = schema.discover_columns("campus", "people").await.unwrap();
        assert_eq!(cols, ["id", "first_name"]);
    }

    #[tokio::test]
    async fn static_schema_unknown_table_is_empty() {
        let schema = StaticSchema::new();
        let cols = schema.discover_columns("campus", "ghosts").await.unwrap();
        assert!(cols.is_empty());
    }
}
