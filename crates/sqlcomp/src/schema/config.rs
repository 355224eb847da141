use crate::error::SqlResult;
use crate::ident::validate_ident;
use serde::Deserialize;

/// How column names are looked up in Postgres.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscoveryStrategy {
    /// Query `information_schema.columns`.
    #[default]
    InformationSchema,
    /// Call a set-returning routine that takes the table name and yields one
    /// text column per row, e.g. `get_column_by_table_name(text)`.
    Procedure { name: String },
}

/// Configuration for [`PgSchemaSource`](super::PgSchemaSource).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Lookup strategy.
    pub strategy: DiscoveryStrategy,
    /// Schema searched by the `information_schema` strategy.
    pub schema: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            strategy: DiscoveryStrategy::InformationSchema,
            schema: "public".to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema searched by the `information_schema` strategy.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Look columns up through a set-returning routine.
    pub fn procedure(mut self, name: impl Into<String>) -> Self {
        self.strategy = DiscoveryStrategy::Procedure { name: name.into() };
        self
    }

    /// Look columns up through `information_schema.columns`.
    pub fn information_schema(mut self) -> Self {
        self.strategy = DiscoveryStrategy::InformationSchema;
        self
    }

    /// Check identifiers that end up in SQL text.
    pub fn validate(&self) -> SqlResult<()> {
        match &self.strategy {
            DiscoveryStrategy::InformationSchema => validate_ident(&self.schema),
            DiscoveryStrategy::Procedure { name } => validate_ident(name),
        }
    }

    /// The discovery statement for this configuration.
    ///
    /// The information-schema form binds `$1` database (empty means the current
    /// database), `$2` schema, `$3` table. The routine form binds `$1` table.
    pub fn discovery_sql(&self) -> SqlResult<String> {
        self.validate()?;
        let sql = match &self.strategy {
            DiscoveryStrategy::InformationSchema => "SELECT column_name::text \
                 FROM information_schema.columns \
                 WHERE table_catalog = COALESCE(NULLIF($1::text, ''), current_database()::text) \
                 AND table_schema = $2::text \
                 AND table_name = $3::text \
                 ORDER BY ordinal_position"
                .to_string(),
            DiscoveryStrategy::Procedure { name } => format!("SELECT * FROM {name}($1)"),
        };
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlError;

    #[test]
    fn test_default_is_information_schema_public() {
        let cfg = DiscoveryConfig::new();
        assert_eq!(cfg.strategy, DiscoveryStrategy::InformationSchema);
        assert_eq!(cfg.schema, "public");
        let sql = cfg.discovery_sql().unwrap();
        assert!(sql.starts_with("SELECT column_name::text FROM information_schema.columns"));
        assert!(sql.contains("table_name = $3::text"));
        assert!(sql.ends_with("ORDER BY ordinal_position"));
    }

    #[test]
    fn test_procedure_sql() {
        let cfg = DiscoveryConfig::new().procedure("dbqosqos.get_column_by_table_name");
        assert_eq!(
            cfg.discovery_sql().unwrap(),
            "SELECT * FROM dbqosqos.get_column_by_table_name($1)"
        );
    }

    #[test]
    fn test_rejects_bad_procedure_name() {
        let cfg = DiscoveryConfig::new().procedure("cols(); DROP TABLE people; --");
        assert!(matches!(cfg.discovery_sql(), Err(SqlError::Validation(_))));
    }

    #[test]
    fn test_deserialize() {
        let cfg: DiscoveryConfig = serde_json::from_str(
            r#"{"strategy": {"kind": "procedure", "name": "get_columns"}}"#,
        )
        .unwrap();
        assert_eq!(
            cfg.strategy,
            DiscoveryStrategy::Procedure {
                name: "get_columns".into()
            }
        );
        assert_eq!(cfg.schema, "public");

        let cfg: DiscoveryConfig = serde_json::from_str(r#"{"schema": "campus"}"#).unwrap();
        assert_eq!(cfg, DiscoveryConfig::new().schema("campus"));
    }
}
