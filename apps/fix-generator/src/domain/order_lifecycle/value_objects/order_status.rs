//! Order status in the synthesized lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status reported on execution reports (FIX tag 39).
///
/// Only the fill states are ever written; a synthesized order is never
/// canceled, rejected or expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Some quantity filled, some still open.
    PartiallyFilled,
    /// Nothing left open.
    Filled,
}

impl OrderStatus {
    /// Status for an order with `remaining` quantity left after a fill.
    #[must_use]
    pub const fn after_fill(remaining: u32) -> Self {
        if remaining == 0 {
            Self::Filled
        } else {
            Self::PartiallyFilled
        }
    }

    /// Get the tag 39 value.
    #[must_use]
    pub const fn fix_code(&self) -> u8 {
        match self {
            Self::PartiallyFilled => 1,
            Self::Filled => 2,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            Self::Filled => write!(f, "FILLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_fill_depends_only_on_remaining() {
        assert_eq!(OrderStatus::after_fill(0), OrderStatus::Filled);
        assert_eq!(OrderStatus::after_fill(1), OrderStatus::PartiallyFilled);
        assert_eq!(OrderStatus::after_fill(9_999), OrderStatus::PartiallyFilled);
    }

    #[test]
    fn order_status_fix_code() {
        assert_eq!(OrderStatus::PartiallyFilled.fix_code(), 1);
        assert_eq!(OrderStatus::Filled.fix_code(), 2);
    }

    #[test]
    fn order_status_serde() {
        let json = serde_json::to_string(&OrderStatus::PartiallyFilled).unwrap();
        assert_eq!(json, "\"PARTIALLY_FILLED\"");

        let parsed: OrderStatus = serde_json::from_str("\"FILLED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Filled);
    }
}
