//! E2E Integration Tests for FIX Generation
//!
//! Tests the full flow from YAML config → row source → Arrow table → output.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::fs::File;

use arrow::array::{Array, LargeStringArray};
use arrow::datatypes::DataType;
use arrow::ipc::reader::FileReader;
use arrow::record_batch::RecordBatch;

use fix_generator::application::ports::Table;
use fix_generator::load_config_from_string;

// =============================================================================
// Helpers
// =============================================================================

fn fix_config(tasks: usize, orders_per_task: usize, generator: &str) -> String {
    format!(
        r#"
input:
  type: fix
  tasks: {tasks}
  orders_per_task: {orders_per_task}
generator:
  field_separator: "|"
  seed: 2024
{generator}
parallel:
  max_threads: 2
  min_parallel_units: 1
"#
    )
}

async fn generate(yaml: &str) -> Vec<String> {
    let config = load_config_from_string(yaml).unwrap();
    let table = fix_generator::read_input(&config).await.unwrap();
    fix_column(&table)
}

fn fix_column(table: &Table) -> Vec<String> {
    let schema = table.schema();
    assert_eq!(schema.fields().len(), 1);
    assert_eq!(schema.field(0).name(), "fix");
    assert_eq!(schema.field(0).data_type(), &DataType::LargeUtf8);

    let mut messages = Vec::with_capacity(table.num_rows());
    for batch in table.batches() {
        let column = batch
            .column(0)
            .as_any()
            .downcast_ref::<LargeStringArray>()
            .unwrap();
        assert_eq!(column.null_count(), 0);
        messages.extend(column.iter().flatten().map(str::to_string));
    }
    messages
}

fn fields(message: &str) -> HashMap<&str, &str> {
    message
        .split('|')
        .filter_map(|pair| pair.split_once('='))
        .collect()
}

/// Group rows by client order id, keeping emission order.
fn orders(messages: &[String]) -> HashMap<String, Vec<HashMap<&str, &str>>> {
    let mut orders: HashMap<String, Vec<HashMap<&str, &str>>> = HashMap::new();
    for message in messages {
        let f = fields(message);
        orders.entry(f["11"].to_string()).or_default().push(f);
    }
    orders
}

fn assert_order_invariants(events: &[HashMap<&str, &str>]) {
    assert_eq!(events[0]["35"], "D");
    assert!(events.len() >= 2, "order without execution report");
    assert!(events[1..].iter().all(|e| e["35"] == "8"));

    let original: u32 = events[0]["38"].parse().unwrap();
    let mut leaves = original;
    let mut time: i64 = events[0]["60"].parse().unwrap();
    for report in &events[1..] {
        let next_leaves: u32 = report["151"].parse().unwrap();
        let cum: u32 = report["14"].parse().unwrap();
        let next_time: i64 = report["60"].parse().unwrap();
        assert!(next_leaves <= leaves);
        assert_eq!(cum + next_leaves, original);
        assert!(next_time > time);
        leaves = next_leaves;
        time = next_time;
    }

    let last = events.last().unwrap();
    assert_eq!(last["151"], "0");
    assert_eq!(last["39"], "2");
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn zero_quantity_order_yields_two_rows() {
    let yaml = fix_config(1, 1, "  max_order_quantity: 1");
    let messages = generate(&yaml).await;

    assert_eq!(messages.len(), 2);
    let new_order = fields(&messages[0]);
    let report = fields(&messages[1]);
    assert_eq!(new_order["35"], "D");
    assert_eq!(new_order["38"], "0");
    assert_eq!(report["35"], "8");
    assert_eq!(report["39"], "2");
    assert_eq!(report["151"], "0");
    assert_eq!(report["11"], new_order["11"]);
}

#[tokio::test]
async fn five_orders_row_count_is_bounded() {
    let messages = generate(&fix_config(1, 5, "")).await;

    assert!(messages.len() >= 10);
    assert!(messages.len() <= 5 * 10_001);
    assert_eq!(orders(&messages).len(), 5);
}

#[tokio::test]
async fn every_order_keeps_its_invariants() {
    let messages = generate(&fix_config(4, 25, "  max_fill_quantity: 500")).await;
    let orders = orders(&messages);

    assert_eq!(orders.len(), 100);
    for events in orders.values() {
        assert_order_invariants(events);
    }
}

#[tokio::test]
async fn constant_total_orders_across_layouts() {
    for (tasks, orders_per_task) in [(1, 12), (3, 4), (12, 1)] {
        let messages = generate(&fix_config(tasks, orders_per_task, "")).await;
        let new_orders = messages.iter().filter(|m| m.starts_with("35=D|")).count();
        assert_eq!(new_orders, 12, "tasks={tasks} orders_per_task={orders_per_task}");

        for events in orders(&messages).values() {
            assert_order_invariants(events);
        }
    }
}

#[tokio::test]
async fn each_unit_becomes_its_own_batch() {
    let config = load_config_from_string(&fix_config(4, 3, "")).unwrap();
    let table = fix_generator::read_input(&config).await.unwrap();

    assert_eq!(table.batches().len(), 4);
    let messages = fix_column(&table);
    assert_eq!(messages.iter().filter(|m| m.starts_with("35=D|")).count(), 12);
}

#[tokio::test]
async fn seeded_runs_repeat_ids() {
    let a = generate(&fix_config(2, 3, "")).await;
    let b = generate(&fix_config(2, 3, "")).await;

    let ids = |messages: &[String]| -> Vec<String> {
        messages.iter().map(|m| fields(m)["11"].to_string()).collect()
    };
    assert_eq!(ids(&a), ids(&b));
}

#[tokio::test]
async fn run_writes_ipc_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fix.arrow");
    let yaml = format!(
        "{}output:\n  format: ipc\n  path: {}\n",
        fix_config(2, 2, ""),
        path.display()
    );
    let config = load_config_from_string(&yaml).unwrap();

    let rows = fix_generator::run(&config).await.unwrap();

    let reader = FileReader::try_new(File::open(&path).unwrap(), None).unwrap();
    let batches: Vec<RecordBatch> = reader.map(Result::unwrap).collect();
    let written: usize = batches.iter().map(RecordBatch::num_rows).sum();
    assert_eq!(batches.len(), 2);
    assert_eq!(written, rows);
    assert!(rows >= 8);
}

#[tokio::test]
async fn run_writes_lines_with_soh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fix.txt");
    let yaml = format!(
        "input:\n  type: fix\n  tasks: 1\n  orders_per_task: 2\noutput:\n  format: lines\n  path: {}\n",
        path.display()
    );
    let config = load_config_from_string(&yaml).unwrap();

    let rows = fix_generator::run(&config).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), rows);
    assert!(text.lines().all(|l| l.starts_with("35=") && l.ends_with("10=000\u{1}")));
}
