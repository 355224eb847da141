//! Statement builder bound to one discovered table.
//!
//! # Usage
//!
//! ```ignore
//! use sqlcomp::{Filter, SqlOperation, SqlQuery};
//!
//! let mut query = SqlQuery::init(&client, "campus", "people").await?;
//! query.add_column("first_name")?;
//! query.add_column("last_name")?;
//! query.add_filter(Filter::gt("admission_year", "2019"))?;
//! query.add_filter(Filter::eq("is_verified", "true").or())?;
//!
//! assert_eq!(
//!     query.render_query()?,
//!     "SELECT first_name, last_name FROM people WHERE admission_year > 2019 OR is_verified = true;"
//! );
//! ```
//!
//! # Link placement
//!
//! Each filter's own [`Link`](crate::Link) is written between it and the filter
//! before it; the first filter's link is never written. With filters
//! `[a (AND), b (OR)]` the clause is `a OR b`.
//!
//! # Known defect
//!
//! A statement without filters still renders `WHERE ;`, which is not valid SQL.
//! This output is kept for compatibility and reported with a `tracing` warning
//! on every render.
//!
//! A builder takes `&mut self` for every mutation and holds no interior
//! mutability; share it across tasks only behind a lock.

use crate::columns::{ALL_COLUMNS, ColumnRegistry};
use crate::error::{SqlError, SqlResult};
use crate::filter::Filter;
use crate::schema::SchemaSource;
use crate::types::SqlOperation;
use crate::writer::SqlWriter;

/// One `column = value` pair of an UPDATE's SET list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// Builder for a single SELECT, UPDATE or DELETE statement.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    database: String,
    table: String,
    operation: SqlOperation,
    columns: ColumnRegistry,
    filters: Vec<Filter>,
    assignments: Vec<Assignment>,
}

impl SqlQuery {
    /// Discover the columns of `table` and create a SELECT builder over them.
    ///
    /// This is the only call that touches the schema source. Fails with
    /// [`SqlError::TableNotFound`] when discovery returns no columns; lookup
    /// and row-decoding failures from the source are passed through.
    pub async fn init<S: SchemaSource>(
        source: &S,
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> SqlResult<Self> {
        let database = database.into();
        let table = table.into();

        let names = source
            .discover_columns(&database, &table)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    target: "sqlcomp.schema",
                    database = %database,
                    table = %table,
                    error = %e,
                    "column discovery failed"
                );
            })?;

        let query = Self::from_columns(database, table, names)?;
        tracing::debug!(
            target: "sqlcomp.schema",
            table = %query.table,
            columns = query.columns.len(),
            "columns discovered"
        );
        Ok(query)
    }

    /// Create a SELECT builder from an already known column list.
    pub fn from_columns<I, S>(
        database: impl Into<String>,
        table: impl Into<String>,
        columns: I,
    ) -> SqlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = table.into();
        let columns = ColumnRegistry::from_names(columns);
        if columns.is_empty() {
            return Err(SqlError::TableNotFound(table));
        }
        Ok(Self {
            database: database.into(),
            table,
            operation: SqlOperation::Select,
            columns,
            filters: Vec::new(),
            assignments: Vec::new(),
        })
    }

    // ==================== Accessors ====================

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn operation(&self) -> &SqlOperation {
        &self.operation
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Selected column names in render order.
    pub fn selected_columns(&self) -> Vec<&str> {
        self.columns.selected().collect()
    }

    // ==================== Mutation ====================

    /// Change the statement verb. Validity is checked at render time.
    pub fn set_operation(&mut self, operation: SqlOperation) -> &mut Self {
        self.operation = operation;
        self
    }

    /// Consuming counterpart of [`SqlQuery::set_operation`].
    pub fn with_operation(mut self, operation: SqlOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Mark a discovered column as selected. Passing [`ALL_COLUMNS`] selects `*`.
    pub fn add_column(&mut self, name: &str) -> SqlResult<()> {
        self.columns.select(name)
    }

    /// Mark every column as selected (renders `*`).
    pub fn add_all_columns(&mut self) {
        // The sentinel is always accepted.
        let _ = self.columns.select(ALL_COLUMNS);
    }

    /// Append a filter after checking its operator, then its column.
    ///
    /// A rejected filter leaves earlier filters untouched.
    pub fn add_filter(&mut self, filter: Filter) -> SqlResult<()> {
        filter.op.is_valid()?;
        self.columns.ensure_known(&filter.column)?;
        self.filters.push(filter);
        Ok(())
    }

    /// Add (or replace) a SET assignment for UPDATE. The value is raw SQL text.
    pub fn add_assignment(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> SqlResult<()> {
        let column = column.into();
        self.columns.ensure_known(&column)?;
        let value = value.into();
        match self.assignments.iter_mut().find(|a| a.column == column) {
            Some(existing) => existing.value = value,
            None => self.assignments.push(Assignment { column, value }),
        }
        Ok(())
    }

    // ==================== Render ====================

    /// Render all filters joined by their links, without the `WHERE` keyword.
    pub fn render_filter_clause(&self) -> SqlResult<String> {
        let mut w = SqlWriter::new();
        for (i, filter) in self.filters.iter().enumerate() {
            let expr = filter.render_expression()?;
            if i > 0 {
                w.push(filter.link.token());
            }
            w.push(expr);
        }
        Ok(w.to_sql())
    }

    /// Render the complete statement, terminated with `;`.
    pub fn render_query(&self) -> SqlResult<String> {
        let mut w = SqlWriter::new();
        w.push(self.operation.token()?);

        match &self.operation {
            SqlOperation::Select => {
                if self.columns.all_selected() {
                    w.push("*");
                } else {
                    let selected = self.selected_columns();
                    if selected.is_empty() {
                        return Err(SqlError::NoColumnsSelected(self.table.clone()));
                    }
                    w.push_list(selected, ", ");
                }
                w.push("FROM").push(self.table.as_str());
            }
            SqlOperation::Delete => {
                w.push("FROM").push(self.table.as_str());
            }
            SqlOperation::Update => {
                if self.assignments.is_empty() {
                    return Err(SqlError::NoAssignments(self.table.clone()));
                }
                w.push(self.table.as_str()).push("SET").push_list(
                    self.assignments
                        .iter()
                        .map(|a| format!("{} = {}", a.column, a.value)),
                    ", ",
                );
            }
            SqlOperation::Unknown(raw) => {
                return Err(SqlError::InvalidOperationKind(raw.clone()));
            }
        }

        let clause = self.render_filter_clause()?;
        if clause.is_empty() {
            tracing::warn!(
                target: "sqlcomp.sql",
                table = %self.table,
                "rendering WHERE without filters; the statement is not valid SQL"
            );
        }
        w.push("WHERE").push(clause);

        let sql = w.finish();
        tracing::debug!(target: "sqlcomp.sql", operation = %self.operation, sql = %sql, "rendered statement");
        Ok(sql)
    }
}

#[cfg(test)]
mod tests;
