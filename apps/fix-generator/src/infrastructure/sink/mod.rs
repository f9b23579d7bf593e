//! Output Sink
//!
//! Wraps generated messages into a one-column Arrow table and writes tables
//! out as Arrow IPC files or plain lines.

mod table;
mod writer;

pub use table::{FIX_COLUMN, fix_schema, messages_to_record_batch};
pub use writer::{OutputFormat, STDOUT_PATH, SinkError, write_ipc, write_lines, write_output};
