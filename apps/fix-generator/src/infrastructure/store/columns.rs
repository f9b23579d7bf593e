//! Mapping of declared SQL column types onto Arrow arrays.

use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryBuilder, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field};
use turso::Value;

/// Arrow representation chosen for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 64-bit integers.
    Integer,
    /// 64-bit floats.
    Real,
    /// UTF-8 text.
    Text,
    /// Raw bytes.
    Blob,
}

impl ColumnKind {
    /// Pick a kind from a declared column type using SQLite affinity rules.
    ///
    /// Types without a recognizable affinity fall back to text.
    #[must_use]
    pub fn from_declared_type(declared: &str) -> Self {
        let declared = declared.to_ascii_uppercase();
        if declared.contains("INT") {
            Self::Integer
        } else if ["CHAR", "CLOB", "TEXT"].iter().any(|t| declared.contains(t)) {
            Self::Text
        } else if declared.contains("BLOB") {
            Self::Blob
        } else if ["REAL", "FLOA", "DOUB"].iter().any(|t| declared.contains(t)) {
            Self::Real
        } else {
            Self::Text
        }
    }

    /// Arrow data type of the kind.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer => DataType::Int64,
            Self::Real => DataType::Float64,
            Self::Text => DataType::Utf8,
            Self::Blob => DataType::Binary,
        }
    }

    /// Nullable Arrow field for a column of this kind.
    #[must_use]
    pub fn field(&self, name: &str) -> Field {
        Field::new(name, self.data_type(), true)
    }
}

/// Quote `name` as an SQL identifier.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Accumulates the values of one column.
///
/// Stored values are coerced to the column kind the way SQLite would read
/// them; values that cannot be coerced become null.
pub(crate) enum ColumnBuilder {
    Integer(Int64Builder),
    Real(Float64Builder),
    Text(StringBuilder),
    Blob(BinaryBuilder),
}

impl ColumnBuilder {
    pub(crate) fn new(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Integer => Self::Integer(Int64Builder::new()),
            ColumnKind::Real => Self::Real(Float64Builder::new()),
            ColumnKind::Text => Self::Text(StringBuilder::new()),
            ColumnKind::Blob => Self::Blob(BinaryBuilder::new()),
        }
    }

    pub(crate) fn append(&mut self, value: Value) {
        match self {
            Self::Integer(b) => b.append_option(match value {
                Value::Integer(v) => Some(v),
                Value::Real(v) => Some(v as i64),
                Value::Text(s) => s.trim().parse().ok(),
                Value::Null | Value::Blob(_) => None,
            }),
            Self::Real(b) => b.append_option(match value {
                Value::Integer(v) => Some(v as f64),
                Value::Real(v) => Some(v),
                Value::Text(s) => s.trim().parse().ok(),
                Value::Null | Value::Blob(_) => None,
            }),
            Self::Text(b) => match value {
                Value::Null => b.append_null(),
                Value::Integer(v) => b.append_value(v.to_string()),
                Value::Real(v) => b.append_value(v.to_string()),
                Value::Text(s) => b.append_value(s),
                Value::Blob(bytes) => b.append_value(String::from_utf8_lossy(&bytes)),
            },
            Self::Blob(b) => match value {
                Value::Null => b.append_null(),
                Value::Integer(v) => b.append_value(v.to_string()),
                Value::Real(v) => b.append_value(v.to_string()),
                Value::Text(s) => b.append_value(s),
                Value::Blob(bytes) => b.append_value(bytes),
            },
        }
    }

    pub(crate) fn finish(self) -> ArrayRef {
        match self {
            Self::Integer(mut b) => Arc::new(b.finish()),
            Self::Real(mut b) => Arc::new(b.finish()),
            Self::Text(mut b) => Arc::new(b.finish()),
            Self::Blob(mut b) => Arc::new(b.finish()),
        }
    }
}
