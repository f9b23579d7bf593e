//! Order type and handling instruction of new orders.

use serde::{Deserialize, Serialize};

/// Order type (FIX tag 40). Synthesized orders are always market orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order, written as `2` in the dataset's code table.
    Market,
}

impl OrderType {
    /// Get the tag 40 value.
    #[must_use]
    pub const fn fix_code(&self) -> u8 {
        match self {
            Self::Market => 2,
        }
    }
}

/// Handling instruction (FIX tag 21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlingInstruction {
    /// Automated execution, broker intervention allowed.
    Automated,
}

impl HandlingInstruction {
    /// Get the tag 21 value.
    #[must_use]
    pub const fn fix_code(&self) -> u8 {
        match self {
            Self::Automated => 2,
        }
    }
}
