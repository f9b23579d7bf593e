//! Message Generator Service
//!
//! Drives order lifecycles for one unit of generation work and renders every
//! emitted event. A generator owns its RNG and is never shared across units.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::application::ports::{Clock, MessageEncoder};
use crate::domain::order_lifecycle::{LifecycleError, OrderLifecycle, OrderLimits, ProtocolEvent};

/// Build the RNG of one unit.
///
/// With a base seed each unit gets `base + unit`, so a run is reproducible
/// and units never share a stream. Without one, units draw from OS entropy.
#[must_use]
pub fn unit_rng(base_seed: Option<u64>, unit: usize) -> StdRng {
    match base_seed {
        Some(base) => StdRng::seed_from_u64(base.wrapping_add(unit as u64)),
        None => StdRng::from_os_rng(),
    }
}

/// Per-unit generation driver.
pub struct MessageGenerator<C, E>
where
    C: Clock,
    E: MessageEncoder,
{
    rng: StdRng,
    clock: Arc<C>,
    encoder: Arc<E>,
    limits: OrderLimits,
}

impl<C, E> MessageGenerator<C, E>
where
    C: Clock,
    E: MessageEncoder,
{
    /// Create a generator owning `rng`.
    pub fn new(rng: StdRng, clock: Arc<C>, encoder: Arc<E>, limits: OrderLimits) -> Self {
        Self {
            rng,
            clock,
            encoder,
            limits,
        }
    }

    /// Drive one order to completion, appending its messages to `out`.
    ///
    /// Returns the number of messages appended.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError` if the lifecycle rejects a transition.
    pub fn generate_order(&mut self, out: &mut Vec<String>) -> Result<usize, LifecycleError> {
        let start = out.len();
        let mut lifecycle = OrderLifecycle::create(&mut self.rng, self.clock.now(), self.limits);

        let new_order = lifecycle.emit_new_order(&mut self.rng)?;
        out.push(self.encoder.encode(&ProtocolEvent::from(new_order)));

        while !lifecycle.is_complete() {
            let report = lifecycle.emit_next_execution_report(&mut self.rng)?;
            out.push(self.encoder.encode(&ProtocolEvent::from(report)));
        }

        Ok(out.len() - start)
    }

    /// Generate `orders` complete orders, messages in emission order.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError` if a lifecycle rejects a transition.
    pub fn generate_unit(&mut self, orders: usize) -> Result<Vec<String>, LifecycleError> {
        // At least two messages per order.
        let mut out = Vec::with_capacity(orders.saturating_mul(2));
        for _ in 0..orders {
            self.generate_order(&mut out)?;
        }
        Ok(out)
    }
}
