//! Order lifecycle errors.

use thiserror::Error;

use super::lifecycle::LifecyclePhase;

/// Event an order lifecycle was asked to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// New Order Single.
    NewOrder,
    /// Execution Report.
    ExecutionReport,
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewOrder => write!(f, "new order"),
            Self::ExecutionReport => write!(f, "execution report"),
        }
    }
}

/// Errors that can occur while driving an order lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The requested event is not allowed in the current phase.
    #[error("Invalid lifecycle transition: cannot emit {action} while order is {phase}")]
    InvalidTransition {
        /// Phase the order was in.
        phase: LifecyclePhase,
        /// Event that was requested.
        action: LifecycleAction,
    },

    /// A generation limit is out of range.
    #[error("Invalid order limit '{name}': must be at least {minimum}")]
    InvalidLimit {
        /// Limit name.
        name: &'static str,
        /// Smallest accepted value.
        minimum: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_display() {
        let err = LifecycleError::InvalidTransition {
            phase: LifecyclePhase::Filled,
            action: LifecycleAction::ExecutionReport,
        };
        assert_eq!(
            err.to_string(),
            "Invalid lifecycle transition: cannot emit execution report while order is FILLED"
        );
    }

    #[test]
    fn invalid_limit_display() {
        let err = LifecycleError::InvalidLimit {
            name: "max_fill_quantity",
            minimum: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid order limit 'max_fill_quantity': must be at least 2"
        );
    }
}
