//! Application Services
//!
//! Services coordinate the domain with injected ports for one unit of work.

mod message_generator;

pub use message_generator::{MessageGenerator, unit_rng};
