//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach time, encoding, storage and
//! worker threads. Adapters live in `infrastructure`.

mod clock_port;
mod executor_port;
mod message_encoder_port;
mod row_source_port;

pub use clock_port::{Clock, FixedClock, SystemClock};
pub use executor_port::{SequentialExecutor, UnitOfWorkExecutor};
pub use message_encoder_port::MessageEncoder;
pub use row_source_port::{BoxError, RowSource, SourceError, Table};
