//! Order Lifecycle Bounded Context
//!
//! Synthesizes the message stream of one order: a New Order Single followed
//! by Execution Reports until the order is filled.
//!
//! # Components
//!
//! - [`OrderLifecycle`]: state machine owning identity, fill state and time cursor
//! - [`ProtocolEvent`]: snapshots handed to the encoder
//! - [`value_objects`]: identifiers, symbol, side, status and time types
//!
//! # Invariants
//!
//! - Exactly one new order, always first
//! - At least one execution report, the last one `FILLED` with zero leaves
//! - Leaves quantity never increases, event time strictly increases

pub mod errors;
pub mod events;
pub mod lifecycle;
pub mod value_objects;

pub use errors::{LifecycleAction, LifecycleError};
pub use events::{ExecutionReport, NewOrderSingle, ProtocolEvent};
pub use lifecycle::{
    DEFAULT_MAX_FILL_QUANTITY, DEFAULT_MAX_ORDER_QUANTITY, DEFAULT_MAX_TIME_STEP_MS,
    LifecyclePhase, MIN_FILL_QUANTITY_BOUND, OrderLifecycle, OrderLimits,
};
