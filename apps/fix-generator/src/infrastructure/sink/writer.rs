//! Table writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::error::ArrowError;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::application::ports::Table;

/// Path meaning standard output for line output.
pub const STDOUT_PATH: &str = "-";

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Arrow IPC file.
    #[default]
    Ipc,
    /// One row per line; columns separated by tabs.
    Lines,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipc => write!(f, "ipc"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

/// Errors writing a table.
#[derive(Debug, Error)]
pub enum SinkError {
    /// I/O error.
    #[error("Output I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow encoding error.
    #[error("Output encoding error: {0}")]
    Arrow(#[from] ArrowError),

    /// IPC output cannot go to stdout.
    #[error("IPC output requires a file path, got '{STDOUT_PATH}'")]
    IpcToStdout,
}

/// Write `table` as an Arrow IPC file at `path`, one IPC batch per table batch.
///
/// # Errors
///
/// Returns `SinkError` if the file cannot be created or encoded.
pub fn write_ipc(table: &Table, path: &Path) -> Result<(), SinkError> {
    let file = File::create(path)?;
    let mut writer = FileWriter::try_new(BufWriter::new(file), table.schema())?;
    for batch in table.batches() {
        writer.write(batch)?;
    }
    writer.finish()?;
    Ok(())
}

/// Write every row of `table` as one line.
///
/// Values are rendered verbatim, so FIX separators pass through untouched.
/// Nulls render as empty strings.
///
/// # Errors
///
/// Returns `SinkError` if a column cannot be formatted or the write fails.
pub fn write_lines<W: Write>(table: &Table, writer: &mut W) -> Result<(), SinkError> {
    let options = FormatOptions::default();
    for batch in table.batches() {
        write_batch_lines(batch, &options, writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_batch_lines<W: Write>(
    batch: &RecordBatch,
    options: &FormatOptions<'_>,
    writer: &mut W,
) -> Result<(), SinkError> {
    let formatters = batch
        .columns()
        .iter()
        .map(|column| ArrayFormatter::try_new(column.as_ref(), options))
        .collect::<Result<Vec<_>, _>>()?;

    for row in 0..batch.num_rows() {
        for (i, formatter) in formatters.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\t")?;
            }
            write!(writer, "{}", formatter.value(row))?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write `table` in `format` to `path` (`-` is stdout for line output).
///
/// # Errors
///
/// Returns `SinkError` if writing fails or IPC output targets stdout.
pub fn write_output(table: &Table, format: OutputFormat, path: &str) -> Result<(), SinkError> {
    match format {
        OutputFormat::Ipc if path == STDOUT_PATH => return Err(SinkError::IpcToStdout),
        OutputFormat::Ipc => write_ipc(table, Path::new(path))?,
        OutputFormat::Lines if path == STDOUT_PATH => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_lines(table, &mut writer)?;
        }
        OutputFormat::Lines => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_lines(table, &mut writer)?;
        }
    }

    info!(
        rows = table.num_rows(),
        batches = table.batches().len(),
        %format,
        path,
        "Output written"
    );
    Ok(())
}
