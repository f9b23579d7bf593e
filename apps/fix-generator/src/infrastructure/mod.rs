//! Infrastructure Layer
//!
//! Adapters implementing the application ports:
//!
//! - **fix**: tag=value message encoding
//! - **parallel**: rayon-backed unit-of-work executor
//! - **store**: turso table reader
//! - **sink**: Arrow table assembly and output writers

pub mod fix;
pub mod parallel;
pub mod sink;
pub mod store;
