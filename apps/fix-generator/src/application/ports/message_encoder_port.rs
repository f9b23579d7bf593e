//! Message Encoder Port (Driven Port)

use crate::domain::order_lifecycle::ProtocolEvent;

/// Port for rendering a protocol event into its wire text.
///
/// Implementations must be pure: the same event always yields the same text.
pub trait MessageEncoder: Send + Sync {
    /// Render one event.
    fn encode(&self, event: &ProtocolEvent) -> String;
}
