//! Application Use Cases

mod generate_messages;

pub use generate_messages::{FixMessageSource, GenerationPlan};
