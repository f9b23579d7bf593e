//! Row Source Port (Driven Port)
//!
//! A source of rows materialized as an Arrow table: one or more record
//! batches sharing a schema. Both the message generator and the table reader
//! sit behind it.

use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use async_trait::async_trait;

use crate::domain::order_lifecycle::LifecycleError;

/// Boxed error from an external store, surfaced unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reading from a row source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The store could not be opened.
    #[error("Store unreachable at '{connection}': {message}")]
    StoreUnreachable {
        /// Connection string that was used.
        connection: String,
        /// Error message.
        message: String,
    },

    /// The named table does not exist in the store.
    #[error("Table not found: '{table}'")]
    TableNotFound {
        /// Table name.
        table: String,
    },

    /// Error raised by the store driver.
    #[error(transparent)]
    Store(BoxError),

    /// Record batch assembly failed.
    #[error("Record batch error: {0}")]
    Arrow(#[from] ArrowError),

    /// An order lifecycle was driven out of order.
    #[error("Generation failed: {0}")]
    Generation(#[from] LifecycleError),

    /// A background task panicked or was cancelled.
    #[error("Background task failed: {message}")]
    Task {
        /// Error message.
        message: String,
    },
}

impl SourceError {
    /// Wrap a store driver error.
    pub fn store(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(error))
    }
}

/// Rows read from a source, split into batches that share one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    /// Create a table from batches.
    ///
    /// # Errors
    ///
    /// Returns `ArrowError::SchemaError` if a batch does not match `schema`.
    pub fn try_new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Result<Self, ArrowError> {
        if let Some(batch) = batches.iter().find(|b| b.schema() != schema) {
            return Err(ArrowError::SchemaError(format!(
                "batch schema {} does not match table schema {}",
                batch.schema(),
                schema
            )));
        }
        Ok(Self { schema, batches })
    }

    /// Table holding a single batch.
    #[must_use]
    pub fn from_batch(batch: RecordBatch) -> Self {
        Self {
            schema: batch.schema(),
            batches: vec![batch],
        }
    }

    /// Schema shared by every batch.
    pub const fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Batches in row order.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Total number of rows.
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }
}

/// Port for reading a table of rows.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Read every row.
    async fn read(&self) -> Result<Table, SourceError>;
}
