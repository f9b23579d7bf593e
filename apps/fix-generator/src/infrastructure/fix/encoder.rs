//! Tag=value encoder for generated protocol events.
//!
//! Rendering is a pure function of the event snapshot: every field is
//! written as `tag=value` followed by the separator, the last one included.

use std::fmt::{self, Write};

use crate::application::ports::MessageEncoder;
use crate::domain::order_lifecycle::{ExecutionReport, NewOrderSingle, ProtocolEvent};

use super::tags;

/// SOH, the standard FIX field delimiter.
pub const SOH: char = '\u{1}';

/// A single field value, borrowed from the event where possible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Text value.
    Str(&'a str),
    /// Small enumerated code.
    Code(u8),
    /// Quantity.
    Qty(u32),
    /// Epoch milliseconds.
    Millis(i64),
    /// Price.
    Price(f32),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(v) => f.write_str(v),
            Self::Code(v) => write!(f, "{v}"),
            Self::Qty(v) => write!(f, "{v}"),
            Self::Millis(v) => write!(f, "{v}"),
            Self::Price(v) => write_price(f, *v),
        }
    }
}

/// Shortest round-trip digits: plain decimal with at least one fractional
/// digit inside `[1e-3, 1e7)`, `d.dE<exp>` outside it.
fn write_price(f: &mut fmt::Formatter<'_>, v: f32) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if v == 0.0 {
        return f.write_str(if v.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    if (1e-3..1e7).contains(&v.abs()) {
        let plain = v.to_string();
        f.write_str(&plain)?;
        if !plain.contains('.') {
            f.write_str(".0")?;
        }
        return Ok(());
    }

    let scientific = format!("{v:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    f.write_str(mantissa)?;
    if !mantissa.contains('.') {
        f.write_str(".0")?;
    }
    write!(f, "E{exponent}")
}

/// An ordered list of `(tag, value)` pairs.
pub type FieldList<'a> = Vec<(u32, FieldValue<'a>)>;

/// Append `fields` to `out` as `tag=value<separator>` pairs.
pub fn encode_fields_into(out: &mut String, fields: &[(u32, FieldValue<'_>)], separator: char) {
    for (tag, value) in fields {
        // Writing into a String cannot fail.
        let _ = write!(out, "{tag}={value}{separator}");
    }
}

/// Render `fields` as `tag=value<separator>` pairs.
#[must_use]
pub fn encode_fields(fields: &[(u32, FieldValue<'_>)], separator: char) -> String {
    let mut out = String::with_capacity(fields.len() * 16);
    encode_fields_into(&mut out, fields, separator);
    out
}

/// Encoder for New Order Single and Execution Report snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixEncoder {
    separator: char,
}

impl Default for FixEncoder {
    fn default() -> Self {
        Self { separator: SOH }
    }
}

impl FixEncoder {
    /// Create an encoder writing `separator` after every field.
    #[must_use]
    pub const fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Field separator.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Encode any protocol event.
    #[must_use]
    pub fn encode(&self, event: &ProtocolEvent) -> String {
        encode_fields(&Self::fields(event), self.separator)
    }

    /// Encode a New Order Single.
    #[must_use]
    pub fn encode_new_order(&self, event: &NewOrderSingle) -> String {
        encode_fields(&Self::new_order_fields(event), self.separator)
    }

    /// Encode an Execution Report.
    #[must_use]
    pub fn encode_execution_report(&self, event: &ExecutionReport) -> String {
        encode_fields(&Self::execution_report_fields(event), self.separator)
    }

    /// Fields of any protocol event, in wire order.
    #[must_use]
    pub fn fields(event: &ProtocolEvent) -> FieldList<'_> {
        match event {
            ProtocolEvent::NewOrderSingle(e) => Self::new_order_fields(e),
            ProtocolEvent::ExecutionReport(e) => Self::execution_report_fields(e),
        }
    }

    /// Fields of a New Order Single, in wire order.
    #[must_use]
    pub fn new_order_fields(event: &NewOrderSingle) -> FieldList<'_> {
        vec![
            (tags::MSG_TYPE, FieldValue::Str(tags::MSG_TYPE_NEW_ORDER_SINGLE)),
            (tags::CL_ORD_ID, FieldValue::Str(event.client_order_id.as_str())),
            (
                tags::HANDL_INST,
                FieldValue::Code(event.handling_instruction.fix_code()),
            ),
            (tags::SYMBOL, FieldValue::Str(event.symbol.as_str())),
            (tags::SIDE, FieldValue::Code(event.side.fix_code())),
            (
                tags::TRANSACT_TIME,
                FieldValue::Millis(event.event_time.as_millis()),
            ),
            (tags::ORDER_QTY, FieldValue::Qty(event.order_quantity)),
            (tags::ORD_TYPE, FieldValue::Code(event.order_type.fix_code())),
            (tags::CHECKSUM, FieldValue::Str(tags::CHECKSUM_PLACEHOLDER)),
        ]
    }

    /// Fields of an Execution Report, in wire order.
    #[must_use]
    pub fn execution_report_fields(event: &ExecutionReport) -> FieldList<'_> {
        vec![
            (tags::MSG_TYPE, FieldValue::Str(tags::MSG_TYPE_EXECUTION_REPORT)),
            (tags::ORDER_ID, FieldValue::Str(event.order_id.as_str())),
            (tags::CL_ORD_ID, FieldValue::Str(event.client_order_id.as_str())),
            (tags::EXEC_ID, FieldValue::Str(event.execution_id.as_str())),
            (tags::EXEC_TRANS_TYPE, FieldValue::Code(tags::EXEC_NEW)),
            (tags::EXEC_TYPE, FieldValue::Code(tags::EXEC_NEW)),
            (tags::ORD_STATUS, FieldValue::Code(event.status.fix_code())),
            (tags::SYMBOL, FieldValue::Str(event.symbol.as_str())),
            (tags::SIDE, FieldValue::Code(event.side.fix_code())),
            (tags::LEAVES_QTY, FieldValue::Qty(event.leaves_quantity)),
            (tags::CUM_QTY, FieldValue::Qty(event.cumulative_quantity)),
            (tags::AVG_PX, FieldValue::Price(event.average_price)),
            (
                tags::TRANSACT_TIME,
                FieldValue::Millis(event.event_time.as_millis()),
            ),
            (tags::CHECKSUM, FieldValue::Str(tags::CHECKSUM_PLACEHOLDER)),
        ]
    }
}

impl MessageEncoder for FixEncoder {
    fn encode(&self, event: &ProtocolEvent) -> String {
        Self::encode(self, event)
    }
}
