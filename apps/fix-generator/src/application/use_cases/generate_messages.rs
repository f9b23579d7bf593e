//! Generate Messages Use Case
//!
//! Fans generation units out over an executor. Each unit turns its messages
//! into one record batch as soon as it finishes, and the table holds the
//! batches in unit order. Message order within an order is preserved.

use std::sync::Arc;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use async_trait::async_trait;
use tracing::{Level, debug, info, span};

use crate::application::ports::{
    Clock, MessageEncoder, RowSource, SourceError, Table, UnitOfWorkExecutor,
};
use crate::application::services::{MessageGenerator, unit_rng};
use crate::domain::order_lifecycle::OrderLimits;
use crate::infrastructure::sink::{fix_schema, messages_to_record_batch};

/// How much to generate and with which limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Number of independent units of work.
    pub tasks: usize,
    /// Orders generated by each unit.
    pub orders_per_task: usize,
    /// Random draw bounds.
    pub limits: OrderLimits,
    /// Base seed; `None` seeds every unit from OS entropy.
    pub seed: Option<u64>,
}

impl GenerationPlan {
    /// Total number of orders the plan produces.
    #[must_use]
    pub const fn total_orders(&self) -> usize {
        self.tasks.saturating_mul(self.orders_per_task)
    }
}

/// Row source producing synthetic FIX messages.
pub struct FixMessageSource<X, C, E>
where
    X: UnitOfWorkExecutor,
    C: Clock,
    E: MessageEncoder,
{
    executor: Arc<X>,
    clock: Arc<C>,
    encoder: Arc<E>,
    plan: GenerationPlan,
}

impl<X, C, E> Clone for FixMessageSource<X, C, E>
where
    X: UnitOfWorkExecutor,
    C: Clock,
    E: MessageEncoder,
{
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            clock: Arc::clone(&self.clock),
            encoder: Arc::clone(&self.encoder),
            plan: self.plan,
        }
    }
}

impl<X, C, E> FixMessageSource<X, C, E>
where
    X: UnitOfWorkExecutor,
    C: Clock,
    E: MessageEncoder,
{
    /// Create a new FixMessageSource.
    pub fn new(executor: Arc<X>, clock: Arc<C>, encoder: Arc<E>, plan: GenerationPlan) -> Self {
        Self {
            executor,
            clock,
            encoder,
            plan,
        }
    }

    /// Generation plan.
    pub const fn plan(&self) -> &GenerationPlan {
        &self.plan
    }

    /// Run every unit on the executor, one batch per unit.
    ///
    /// Blocks the calling thread until all units finish.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any unit.
    pub fn generate(&self) -> Result<Table, SourceError> {
        let plan = self.plan;
        let units = self.executor.run_units(plan.tasks, |unit| {
            let _span = span!(Level::DEBUG, "generation_unit", unit).entered();
            let mut generator = MessageGenerator::new(
                unit_rng(plan.seed, unit),
                Arc::clone(&self.clock),
                Arc::clone(&self.encoder),
                plan.limits,
            );
            let messages = generator.generate_unit(plan.orders_per_task)?;
            let batch = messages_to_record_batch(messages)?;
            debug!(unit, rows = batch.num_rows(), "Unit complete");
            Ok::<RecordBatch, SourceError>(batch)
        });

        let batches = units.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(Table::try_new(fix_schema(), batches)?)
    }
}

#[async_trait]
impl<X, C, E> RowSource for FixMessageSource<X, C, E>
where
    X: UnitOfWorkExecutor + 'static,
    C: Clock + 'static,
    E: MessageEncoder + 'static,
{
    async fn read(&self) -> Result<Table, SourceError> {
        info!(
            tasks = self.plan.tasks,
            orders_per_task = self.plan.orders_per_task,
            seeded = self.plan.seed.is_some(),
            "Starting FIX message generation"
        );
        let start = Instant::now();

        let source = self.clone();
        let table = tokio::task::spawn_blocking(move || source.generate())
            .await
            .map_err(|e| SourceError::Task {
                message: e.to_string(),
            })??;

        let rows = table.num_rows();

        let elapsed = start.elapsed();
        let rows_per_sec = if elapsed.as_secs_f64() > 0.0 {
            rows as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        info!(
            orders = self.plan.total_orders(),
            rows,
            elapsed_ms = elapsed.as_millis() as u64,
            rows_per_sec,
            batches = table.batches().len(),
            "FIX message generation complete"
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{FixedClock, SequentialExecutor};
    use crate::infrastructure::fix::FixEncoder;
    use arrow::array::{Array, LargeStringArray};
    use arrow::datatypes::DataType;

    fn source(
        tasks: usize,
        orders_per_task: usize,
        limits: OrderLimits,
    ) -> FixMessageSource<SequentialExecutor, FixedClock, FixEncoder> {
        FixMessageSource::new(
            Arc::new(SequentialExecutor),
            Arc::new(FixedClock::at_millis(0)),
            Arc::new(FixEncoder::new('|')),
            GenerationPlan {
                tasks,
                orders_per_task,
                limits,
                seed: Some(11),
            },
        )
    }

    fn messages(batch: &RecordBatch) -> Vec<String> {
        let column = batch
            .column(0)
            .as_any()
            .downcast_ref::<LargeStringArray>()
            .unwrap();
        assert_eq!(column.null_count(), 0);
        column.iter().flatten().map(str::to_string).collect()
    }

    fn new_orders(messages: &[String]) -> usize {
        messages.iter().filter(|m| m.starts_with("35=D|")).count()
    }

    #[test]
    fn total_orders_multiplies() {
        let plan = *source(3, 4, OrderLimits::default()).plan();
        assert_eq!(plan.total_orders(), 12);
    }

    #[test]
    fn generate_keeps_one_batch_per_unit() {
        let table = source(3, 2, OrderLimits::default()).generate().unwrap();

        assert_eq!(table.batches().len(), 3);
        for batch in table.batches() {
            assert_eq!(new_orders(&messages(batch)), 2);
        }
    }

    #[test]
    fn zero_tasks_yield_empty_table_with_schema() {
        let table = source(0, 5, OrderLimits::default()).generate().unwrap();

        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.schema(), &fix_schema());
    }

    #[tokio::test]
    async fn read_builds_single_fix_column() {
        let limits = OrderLimits::new(1, 3_000, 10).unwrap();
        let table = source(1, 1, limits).read().await.unwrap();

        assert_eq!(table.num_rows(), 2);
        let schema = table.schema();
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.field(0).name(), "fix");
        assert_eq!(schema.field(0).data_type(), &DataType::LargeUtf8);

        let rows = messages(&table.batches()[0]);
        assert!(rows[0].starts_with("35=D|"));
        assert!(rows[1].contains("|39=2|"));
        assert!(rows[1].contains("|151=0|"));
    }
}
