//! Row mapping traits

use crate::error::{SqlError, SqlResult};
use tokio_postgres::Row;

/// Trait for types that can be built from a database row
pub trait FromRow: Sized {
    /// Convert a database row into Self
    fn from_row(row: &Row) -> SqlResult<Self>;
}

/// Extension trait for Row to provide typed access
pub trait RowExt {
    /// Try to get a column value, returning SqlError::RecordRead on failure
    fn try_get_column<T>(&self, column: &str) -> SqlResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> SqlResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| SqlError::record_read(column, e.to_string()))
    }
}
