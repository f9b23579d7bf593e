//! Order Lifecycle State Machine
//!
//! Drives a single synthesized order from its New Order Single through a
//! random number of partial fills until it is fully filled.
//!
//! ```text
//! NEW --emit_new_order--> PENDING_FILL --emit_next_execution_report--> PARTIALLY_FILLED
//!                              |                                            |   ^
//!                              |                                            +---+
//!                              +----------------------> FILLED <------------+
//! ```
//!
//! The lifecycle owns no randomness and no clock: both are passed in by the
//! caller so a seeded generator reproduces the same stream.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{LifecycleAction, LifecycleError};
use super::events::{ExecutionReport, NewOrderSingle};
use super::value_objects::{
    ClientOrderId, EventTime, ExecutionId, HandlingInstruction, OrderId, OrderSide, OrderStatus,
    OrderType, Symbol,
};

/// Default exclusive upper bound of an order's original quantity.
pub const DEFAULT_MAX_ORDER_QUANTITY: u32 = 10_000;

/// Default exclusive upper bound of a single fill.
pub const DEFAULT_MAX_FILL_QUANTITY: u32 = 3_000;

/// Default inclusive upper bound of the time step between events, in ms.
pub const DEFAULT_MAX_TIME_STEP_MS: u32 = 10;

/// Smallest exclusive fill bound that can make progress.
pub const MIN_FILL_QUANTITY_BOUND: u32 = 2;

/// Bounds of the random draws made by a lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLimits {
    max_order_quantity: u32,
    max_fill_quantity: u32,
    max_time_step_ms: u32,
}

impl OrderLimits {
    /// Create limits.
    ///
    /// A fill bound of 1 would only ever draw empty fills, so fills need a
    /// bound of at least 2 for an order to terminate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLimit` if a bound is below its minimum.
    pub const fn new(
        max_order_quantity: u32,
        max_fill_quantity: u32,
        max_time_step_ms: u32,
    ) -> Result<Self, LifecycleError> {
        if max_order_quantity == 0 {
            return Err(LifecycleError::InvalidLimit {
                name: "max_order_quantity",
                minimum: 1,
            });
        }
        if max_fill_quantity < MIN_FILL_QUANTITY_BOUND {
            return Err(LifecycleError::InvalidLimit {
                name: "max_fill_quantity",
                minimum: MIN_FILL_QUANTITY_BOUND,
            });
        }
        if max_time_step_ms == 0 {
            return Err(LifecycleError::InvalidLimit {
                name: "max_time_step_ms",
                minimum: 1,
            });
        }
        Ok(Self {
            max_order_quantity,
            max_fill_quantity,
            max_time_step_ms,
        })
    }

    /// Exclusive upper bound of the original quantity.
    #[must_use]
    pub const fn max_order_quantity(&self) -> u32 {
        self.max_order_quantity
    }

    /// Exclusive upper bound of a single fill.
    #[must_use]
    pub const fn max_fill_quantity(&self) -> u32 {
        self.max_fill_quantity
    }

    /// Inclusive upper bound of the time step.
    #[must_use]
    pub const fn max_time_step_ms(&self) -> u32 {
        self.max_time_step_ms
    }
}

impl Default for OrderLimits {
    fn default() -> Self {
        Self {
            max_order_quantity: DEFAULT_MAX_ORDER_QUANTITY,
            max_fill_quantity: DEFAULT_MAX_FILL_QUANTITY,
            max_time_step_ms: DEFAULT_MAX_TIME_STEP_MS,
        }
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecyclePhase {
    /// Nothing emitted yet.
    New,
    /// New order emitted, no fill reported yet.
    PendingFill,
    /// At least one fill reported, quantity still open.
    PartiallyFilled,
    /// Terminal: the final fill has been reported.
    Filled,
}

impl LifecyclePhase {
    /// Returns true if a New Order Single may be emitted.
    #[must_use]
    pub const fn can_emit_new_order(&self) -> bool {
        matches!(self, Self::New)
    }

    /// Returns true if an Execution Report may be emitted.
    #[must_use]
    pub const fn can_fill(&self) -> bool {
        matches!(self, Self::PendingFill | Self::PartiallyFilled)
    }

    /// Returns true if the phase is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::PendingFill => write!(f, "PENDING_FILL"),
            Self::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            Self::Filled => write!(f, "FILLED"),
        }
    }
}

/// One synthesized order and its fill state.
///
/// Identity, symbol and original quantity are fixed at creation. Remaining
/// quantity only decreases and event time only increases.
#[derive(Debug, Clone)]
pub struct OrderLifecycle {
    client_order_id: ClientOrderId,
    order_id: OrderId,
    symbol: Symbol,
    original_quantity: u32,
    remaining_quantity: u32,
    event_time: EventTime,
    phase: LifecyclePhase,
    limits: OrderLimits,
}

impl OrderLifecycle {
    /// Create a fresh order starting at `now`.
    #[must_use]
    pub fn create<R: Rng + ?Sized>(rng: &mut R, now: EventTime, limits: OrderLimits) -> Self {
        let client_order_id = ClientOrderId::generate(rng);
        let order_id = OrderId::generate(rng);
        let original_quantity = rng.random_range(0..limits.max_order_quantity);
        let symbol = Symbol::random(rng);

        Self {
            client_order_id,
            order_id,
            symbol,
            original_quantity,
            remaining_quantity: original_quantity,
            event_time: now,
            phase: LifecyclePhase::New,
            limits,
        }
    }

    /// Emit the New Order Single.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the new order was already emitted.
    pub fn emit_new_order<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<NewOrderSingle, LifecycleError> {
        if !self.phase.can_emit_new_order() {
            return Err(self.invalid(LifecycleAction::NewOrder));
        }

        let event = NewOrderSingle {
            client_order_id: self.client_order_id.clone(),
            handling_instruction: HandlingInstruction::Automated,
            symbol: self.symbol,
            side: OrderSide::Buy,
            event_time: self.event_time,
            order_quantity: self.original_quantity,
            order_type: OrderType::Market,
        };

        self.phase = LifecyclePhase::PendingFill;
        self.advance_time(rng);
        Ok(event)
    }

    /// Returns true once the final fill has been reported.
    ///
    /// A zero-quantity order still needs one report to get here.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Emit the next Execution Report, consuming a random fill quantity.
    ///
    /// Fills larger than the open quantity are clamped; the order then
    /// reports `FILLED`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` before the new order or after the final fill.
    pub fn emit_next_execution_report<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ExecutionReport, LifecycleError> {
        if !self.phase.can_fill() {
            return Err(self.invalid(LifecycleAction::ExecutionReport));
        }

        let fill_quantity = rng.random_range(0..self.limits.max_fill_quantity);
        self.remaining_quantity = self.remaining_quantity.saturating_sub(fill_quantity);

        let status = OrderStatus::after_fill(self.remaining_quantity);
        self.phase = match status {
            OrderStatus::Filled => LifecyclePhase::Filled,
            OrderStatus::PartiallyFilled => LifecyclePhase::PartiallyFilled,
        };

        let event = ExecutionReport {
            order_id: self.order_id.clone(),
            client_order_id: self.client_order_id.clone(),
            execution_id: ExecutionId::generate(rng),
            status,
            symbol: self.symbol,
            side: OrderSide::Sell,
            leaves_quantity: self.remaining_quantity,
            cumulative_quantity: self.filled_quantity(),
            average_price: rng.random::<f32>(),
            event_time: self.event_time,
        };

        self.advance_time(rng);
        Ok(event)
    }

    /// Client order ID.
    #[must_use]
    pub const fn client_order_id(&self) -> &ClientOrderId {
        &self.client_order_id
    }

    /// Venue order ID.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Instrument.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Original quantity.
    #[must_use]
    pub const fn original_quantity(&self) -> u32 {
        self.original_quantity
    }

    /// Quantity still open.
    #[must_use]
    pub const fn remaining_quantity(&self) -> u32 {
        self.remaining_quantity
    }

    /// Quantity filled so far.
    #[must_use]
    pub const fn filled_quantity(&self) -> u32 {
        self.original_quantity - self.remaining_quantity
    }

    /// Time the next event will carry.
    #[must_use]
    pub const fn event_time(&self) -> EventTime {
        self.event_time
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    fn advance_time<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let step = rng.random_range(1..=self.limits.max_time_step_ms);
        self.event_time = self.event_time.advanced_by(step);
    }

    const fn invalid(&self, action: LifecycleAction) -> LifecycleError {
        LifecycleError::InvalidTransition {
            phase: self.phase,
            action,
        }
    }
}
