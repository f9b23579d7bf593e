//! Turso table reader.
//!
//! Reads every row of one table from a local turso database file into a
//! single record batch. The table is not transformed; column order follows
//! the table definition.

use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use async_trait::async_trait;
use tracing::{Instrument, debug, info, info_span};
use turso::{Builder, Connection, Value};

use crate::application::ports::{RowSource, SourceError, Table};

use super::columns::{ColumnBuilder, ColumnKind, quote_identifier};

/// Connection string of a transient in-memory database.
pub const MEMORY_CONNECTION: &str = ":memory:";

/// Column name and kind, from `PRAGMA table_info`.
#[derive(Debug, Clone)]
struct ColumnSpec {
    name: String,
    kind: ColumnKind,
}

/// Row source reading a named table from a turso database.
#[derive(Debug, Clone)]
pub struct TursoTableSource {
    connection: String,
    table: String,
}

impl TursoTableSource {
    /// Create a reader for `table` in the database at `connection`.
    pub fn new(connection: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            table: table.into(),
        }
    }

    /// Database path.
    #[must_use]
    pub fn connection(&self) -> &str {
        &self.connection
    }

    /// Table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    async fn open(&self) -> Result<Connection, SourceError> {
        // Opening a missing path would silently create an empty database.
        if self.connection != MEMORY_CONNECTION && !Path::new(&self.connection).is_file() {
            return Err(SourceError::StoreUnreachable {
                connection: self.connection.clone(),
                message: "database file does not exist".to_string(),
            });
        }

        let unreachable = |e: turso::Error| SourceError::StoreUnreachable {
            connection: self.connection.clone(),
            message: e.to_string(),
        };
        let db = Builder::new_local(&self.connection)
            .build()
            .await
            .map_err(unreachable)?;
        db.connect().map_err(unreachable)
    }

    async fn columns(&self, conn: &Connection) -> Result<Vec<ColumnSpec>, SourceError> {
        let sql = format!("PRAGMA table_info({})", quote_identifier(&self.table));
        let mut rows = conn.query(&sql, ()).await.map_err(SourceError::store)?;

        let mut columns = Vec::new();
        while let Some(row) = rows.next().await.map_err(SourceError::store)? {
            let name = match row.get_value(1).map_err(SourceError::store)? {
                Value::Text(name) => name,
                other => format!("{other:?}"),
            };
            let declared = match row.get_value(2).map_err(SourceError::store)? {
                Value::Text(declared) => declared,
                _ => String::new(),
            };
            columns.push(ColumnSpec {
                name,
                kind: ColumnKind::from_declared_type(&declared),
            });
        }

        if columns.is_empty() {
            return Err(SourceError::TableNotFound {
                table: self.table.clone(),
            });
        }
        Ok(columns)
    }

    async fn read_table(&self) -> Result<RecordBatch, SourceError> {
        let conn = self.open().await?;
        let columns = self.columns(&conn).await?;
        debug!(columns = columns.len(), "Resolved table columns");

        let schema = Arc::new(Schema::new(
            columns
                .iter()
                .map(|c| c.kind.field(&c.name))
                .collect::<Vec<_>>(),
        ));
        let mut builders: Vec<ColumnBuilder> =
            columns.iter().map(|c| ColumnBuilder::new(c.kind)).collect();

        let sql = format!("SELECT * FROM {}", quote_identifier(&self.table));
        let mut rows = conn.query(&sql, ()).await.map_err(SourceError::store)?;
        while let Some(row) = rows.next().await.map_err(SourceError::store)? {
            for (i, builder) in builders.iter_mut().enumerate() {
                builder.append(row.get_value(i).map_err(SourceError::store)?);
            }
        }

        let arrays = builders.into_iter().map(ColumnBuilder::finish).collect();
        let batch = RecordBatch::try_new(schema, arrays)?;
        info!(rows = batch.num_rows(), "Table read complete");
        Ok(batch)
    }
}

#[async_trait]
impl RowSource for TursoTableSource {
    async fn read(&self) -> Result<Table, SourceError> {
        let span = info_span!("read_table", connection = %self.connection, table = %self.table);
        let batch = self.read_table().instrument(span).await?;
        Ok(Table::from_batch(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, BinaryArray, Float64Array, Int64Array, StringArray};
    use arrow::datatypes::DataType;

    async fn seed_database(path: &Path) {
        let db = Builder::new_local(path.to_str().unwrap())
            .build()
            .await
            .unwrap();
        let conn = db.connect().unwrap();
        conn.execute(
            "CREATE TABLE fills (id INTEGER, symbol TEXT, price REAL, raw BLOB)",
            (),
        )
        .await
        .unwrap();
        conn.execute(
            "INSERT INTO fills VALUES (1, 'AAPL', 0.25, x'0102'), (2, NULL, 0.5, NULL)",
            (),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn reads_whole_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        seed_database(&path).await;

        let source = TursoTableSource::new(path.to_str().unwrap(), "fills");
        let table = source.read().await.unwrap();

        assert_eq!(table.batches().len(), 1);
        let batch = &table.batches()[0];
        assert_eq!(batch.num_rows(), 2);
        let schema = batch.schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["id", "symbol", "price", "raw"]);
        assert_eq!(schema.field(0).data_type(), &DataType::Int64);
        assert_eq!(schema.field(3).data_type(), &DataType::Binary);
        assert!(schema.fields().iter().all(|f| f.is_nullable()));

        let ids = batch.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!((ids.value(0), ids.value(1)), (1, 2));
        let symbols = batch.column(1).as_any().downcast_ref::<StringArray>().unwrap();
        assert_eq!(symbols.value(0), "AAPL");
        assert!(symbols.is_null(1));
        let prices = batch.column(2).as_any().downcast_ref::<Float64Array>().unwrap();
        assert_eq!(prices.value(1), 0.5);
        let raw = batch.column(3).as_any().downcast_ref::<BinaryArray>().unwrap();
        assert_eq!(raw.value(0), &[1, 2]);
        assert!(raw.is_null(1));
    }

    #[tokio::test]
    async fn missing_table_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        seed_database(&path).await;

        let source = TursoTableSource::new(path.to_str().unwrap(), "orders");
        let err = source.read().await.unwrap_err();

        assert!(matches!(err, SourceError::TableNotFound { ref table } if table == "orders"));
    }

    #[tokio::test]
    async fn missing_file_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let source = TursoTableSource::new(path.to_str().unwrap(), "fills");
        let err = source.read().await.unwrap_err();

        assert!(matches!(err, SourceError::StoreUnreachable { .. }));
        assert!(!path.exists());
    }
}
