//! Order side as carried on synthesized messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a synthesized message (FIX tag 54).
///
/// New orders are always `Buy`; execution reports carry the counter side,
/// `Sell`. The wire codes follow the dataset's code table, where buy is
/// written as `2` and sell as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Get the tag 54 value.
    #[must_use]
    pub const fn fix_code(&self) -> u8 {
        match self {
            Self::Buy => 2,
            Self::Sell => 1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}
