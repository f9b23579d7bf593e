//! Protocol events emitted by an order lifecycle.
//!
//! Each event is a snapshot of the order at the moment of emission. Events
//! are handed to the encoder and dropped; the lifecycle keeps no history.

use serde::{Deserialize, Serialize};

use super::value_objects::{
    ClientOrderId, EventTime, ExecutionId, HandlingInstruction, OrderId, OrderSide, OrderStatus,
    OrderType, Symbol,
};

/// Initiating event of an order (FIX `35=D`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderSingle {
    /// Client order ID.
    pub client_order_id: ClientOrderId,
    /// Handling instruction.
    pub handling_instruction: HandlingInstruction,
    /// Instrument.
    pub symbol: Symbol,
    /// Side.
    pub side: OrderSide,
    /// Event time.
    pub event_time: EventTime,
    /// Original order quantity.
    pub order_quantity: u32,
    /// Order type.
    pub order_type: OrderType,
}

/// Fill report against an open order (FIX `35=8`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Venue order ID.
    pub order_id: OrderId,
    /// Client order ID.
    pub client_order_id: ClientOrderId,
    /// Fresh identifier of this report.
    pub execution_id: ExecutionId,
    /// Order status after this fill.
    pub status: OrderStatus,
    /// Instrument.
    pub symbol: Symbol,
    /// Side.
    pub side: OrderSide,
    /// Quantity still open after this fill.
    pub leaves_quantity: u32,
    /// Quantity filled so far, this fill included.
    pub cumulative_quantity: u32,
    /// Synthetic average price in `[0, 1)`.
    pub average_price: f32,
    /// Event time.
    pub event_time: EventTime,
}

/// Any event an order lifecycle can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProtocolEvent {
    /// New Order Single.
    NewOrderSingle(NewOrderSingle),
    /// Execution Report.
    ExecutionReport(ExecutionReport),
}

impl From<NewOrderSingle> for ProtocolEvent {
    fn from(event: NewOrderSingle) -> Self {
        Self::NewOrderSingle(event)
    }
}

impl From<ExecutionReport> for ProtocolEvent {
    fn from(event: ExecutionReport) -> Self {
        Self::ExecutionReport(event)
    }
}
