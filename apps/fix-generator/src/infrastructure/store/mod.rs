//! Tabular Store Adapters
//!
//! Passthrough read of a named table from a local turso database.

mod columns;
mod turso_table_source;

pub use columns::{ColumnKind, quote_identifier};
pub use turso_table_source::{MEMORY_CONNECTION, TursoTableSource};
