//! One-column message table.
//!
//! Messages are stored with 64-bit offsets so a single unit may hold more
//! than 2 GiB of text.

use std::sync::Arc;

use arrow::array::{ArrayRef, LargeStringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

/// Name of the single message column.
pub const FIX_COLUMN: &str = "fix";

/// Schema of the message table: one non-null UTF-8 column.
#[must_use]
pub fn fix_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![Field::new(
        FIX_COLUMN,
        DataType::LargeUtf8,
        false,
    )]))
}

/// Convert generated messages to an Arrow RecordBatch, one row per message.
///
/// # Errors
///
/// Returns `ArrowError` if the batch cannot be assembled.
pub fn messages_to_record_batch(messages: Vec<String>) -> Result<RecordBatch, ArrowError> {
    let column: ArrayRef = Arc::new(LargeStringArray::from(messages));
    RecordBatch::try_new(fix_schema(), vec![column])
}
