// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! FIX Generator - Rust Core Library
//!
//! Synthesizes FIX order lifecycles (one New Order Single followed by
//! Execution Reports until filled) into one-column Arrow tables, fanned out
//! across parallel generation units. Also reads whole tables from a local
//! turso database through the same row source interface.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: the order lifecycle state machine and its value objects
//!   - `order_lifecycle`: `OrderLifecycle`, protocol event snapshots
//!
//! - **Application**: orchestration behind ports
//!   - `ports`: `Clock`, `MessageEncoder`, `RowSource`, `UnitOfWorkExecutor`
//!   - `services`: `MessageGenerator`, the per-unit driver loop
//!   - `use_cases`: `FixMessageSource`, fan-out and table assembly
//!
//! - **Infrastructure**: adapters
//!   - `fix`: tag=value encoder
//!   - `parallel`: rayon executor
//!   - `store`: turso table reader
//!   - `sink`: Arrow IPC and line writers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

pub mod application;
pub mod domain;
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

pub mod config;
pub mod error;
pub mod runner;
pub mod telemetry;

pub use config::{Config, ConfigError, load_config, load_config_from_string, validate_config};
pub use error::Error;
pub use runner::{build_source, read_input, run};
