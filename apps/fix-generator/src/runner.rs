//! Wiring of configuration to a row source and an output sink.

use std::sync::Arc;

use tracing::info;

use crate::application::ports::{RowSource, SystemClock, Table};
use crate::application::use_cases::FixMessageSource;
use crate::config::{Config, InputConfig};
use crate::error::Result;
use crate::infrastructure::fix::FixEncoder;
use crate::infrastructure::parallel::RayonExecutor;
use crate::infrastructure::sink::write_output;
use crate::infrastructure::store::TursoTableSource;

/// Build the row source selected by `input.type`.
///
/// # Errors
///
/// Returns an error if the configuration is incomplete or the thread pool
/// cannot be built.
pub fn build_source(config: &Config) -> Result<Box<dyn RowSource>> {
    match config.input()? {
        InputConfig::Fix(fix) => {
            let plan = config.generation_plan(fix)?;
            let executor = RayonExecutor::new(config.parallel.clone())?;
            let encoder = FixEncoder::new(config.generator.separator()?);
            Ok(Box::new(FixMessageSource::new(
                Arc::new(executor),
                Arc::new(SystemClock),
                Arc::new(encoder),
                plan,
            )))
        }
        InputConfig::Store(store) => Ok(Box::new(TursoTableSource::new(
            store.connection()?,
            store.table_name()?,
        ))),
    }
}

/// Read the configured source into a table.
///
/// # Errors
///
/// Returns an error if the source cannot be built or read.
pub async fn read_input(config: &Config) -> Result<Table> {
    let source = build_source(config)?;
    Ok(source.read().await?)
}

/// Read the configured source and write it to the configured output.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub async fn run(config: &Config) -> Result<usize> {
    let table = read_input(config).await?;
    let rows = table.num_rows();
    write_output(&table, config.output.format, &config.output.path)?;
    info!(rows, "Run complete");
    Ok(rows)
}
