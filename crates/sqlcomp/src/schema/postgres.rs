use super::{DiscoveryConfig, DiscoveryStrategy, SchemaSource};
use crate::error::{SqlError, SqlResult};
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// The query capability discovery needs from a Postgres connection.
///
/// Implemented for `tokio_postgres::Client` and `tokio_postgres::Transaction`.
pub trait PgQuery: Send + Sync {
    fn query_rows(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = Result<Vec<Row>, tokio_postgres::Error>> + Send;
}

impl PgQuery for tokio_postgres::Client {
    async fn query_rows(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, tokio_postgres::Error> {
        tokio_postgres::Client::query(self, sql, params).await
    }
}

impl PgQuery for tokio_postgres::Transaction<'_> {
    async fn query_rows(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, tokio_postgres::Error> {
        tokio_postgres::Transaction::query(self, sql, params).await
    }
}

/// Schema discovery over a borrowed Postgres client.
///
/// # Example
/// ```ignore
/// let source = PgSchemaSource::new(&client)
///     .with_config(DiscoveryConfig::new().procedure("get_column_by_table_name"));
/// let query = SqlQuery::init(&source, "campus", "people", SqlOperation::Select).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PgSchemaSource<'c, C> {
    client: &'c C,
    config: DiscoveryConfig,
}

impl<'c, C: PgQuery> PgSchemaSource<'c, C> {
    pub fn new(client: &'c C) -> Self {
        Self {
            client,
            config: DiscoveryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }
}

impl<C: PgQuery> SchemaSource for PgSchemaSource<'_, C> {
    async fn discover_columns(&self, database: &str, table: &str) -> SqlResult<Vec<String>> {
        let sql = self.config.discovery_sql()?;
        tracing::debug!(target: "sqlcomp.schema", database, table, sql = %sql, "discovering columns");

        let rows = match &self.config.strategy {
            DiscoveryStrategy::InformationSchema => {
                self.client
                    .query_rows(&sql, &[&database, &self.config.schema.as_str(), &table])
                    .await
            }
            DiscoveryStrategy::Procedure { .. } => self.client.query_rows(&sql, &[&table]).await,
        }
        .map_err(|e| SqlError::schema_lookup(table, e.to_string()))?;

        rows.iter().map(decode_column_name).collect()
    }
}

impl SchemaSource for tokio_postgres::Client {
    async fn discover_columns(&self, database: &str, table: &str) -> SqlResult<Vec<String>> {
        PgSchemaSource::new(self)
            .discover_columns(database, table)
            .await
    }
}

impl SchemaSource for tokio_postgres::Transaction<'_> {
    async fn discover_columns(&self, database: &str, table: &str) -> SqlResult<Vec<String>> {
        PgSchemaSource::new(self)
            .discover_columns(database, table)
            .await
    }
}

/// Read the first column of a discovery row as a column name.
fn decode_column_name(row: &Row) -> SqlResult<String> {
    let column = row
        .columns()
        .first()
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "0".to_string());
    row.try_get::<_, String>(0)
        .map_err(|e| SqlError::record_read(column, e.to_string()))
}
