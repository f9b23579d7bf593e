//! Order lifecycle value objects.

mod event_time;
mod identifiers;
mod order_side;
mod order_status;
mod order_type;
mod symbol;

pub use event_time::EventTime;
pub use identifiers::{ClientOrderId, ExecutionId, OrderId};
pub use order_side::OrderSide;
pub use order_status::OrderStatus;
pub use order_type::{HandlingInstruction, OrderType};
pub use symbol::Symbol;
