//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! Randomness enters only through `rand::Rng` parameters; there is no clock here.
//!
//! # Bounded Contexts
//!
//! - [`order_lifecycle`]: Per-order state machine and protocol event snapshots

pub mod order_lifecycle;
