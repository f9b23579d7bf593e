//! Application Layer
//!
//! Orchestrates the order lifecycle domain into tables of generated messages.
//!
//! - **Ports**: clock, encoder, row source and executor interfaces
//! - **Services**: the per-unit generation driver
//! - **Use Cases**: fan-out of generation units into one table

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
