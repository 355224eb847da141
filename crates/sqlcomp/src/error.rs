//! Error types for sqlcomp

use thiserror::Error;

/// Result type alias for sqlcomp operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement building and schema discovery
#[derive(Debug, Error)]
pub enum SqlError {
    /// The schema discovery call itself failed
    #[error("Schema lookup failed for table '{table}': {message}")]
    SchemaLookup { table: String, message: String },

    /// A row returned by schema discovery could not be decoded
    #[error("Record read failed on column '{column}': {message}")]
    RecordRead { column: String, message: String },

    /// Discovery succeeded but returned no columns
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// A named value is not part of the expected set
    #[error("Value '{value}' does not exist in {set}")]
    UnknownValue { value: String, set: String },

    /// Comparison operator outside the supported set
    #[error("Unsupported operator: {0}")]
    InvalidOperator(String),

    /// SQL verb outside the supported set
    #[error("Unsupported operation kind: {0}")]
    InvalidOperationKind(String),

    /// SELECT rendered with nothing selected
    #[error("No columns selected for table '{0}'")]
    NoColumnsSelected(String),

    /// UPDATE rendered without any SET assignment
    #[error("No assignments for UPDATE on table '{0}'")]
    NoAssignments(String),

    /// Malformed identifier or configuration value
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SqlError {
    /// Create a schema lookup error for a table
    pub fn schema_lookup(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaLookup {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a record read error for a specific column
    pub fn record_read(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RecordRead {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an unknown value error
    pub fn unknown_value(value: impl Into<String>, set: impl Into<String>) -> Self {
        Self::UnknownValue {
            value: value.into(),
            set: set.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a table not found error
    pub fn is_table_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound(_))
    }

    /// Check if this is an unknown value error
    pub fn is_unknown_value(&self) -> bool {
        matches!(self, Self::UnknownValue { .. })
    }

    /// Check if this error came from the schema discovery boundary
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaLookup { .. } | Self::RecordRead { .. } | Self::TableNotFound(_)
        )
    }
}
