//! FIX Generator Binary
//!
//! Generates a synthetic FIX message table, or reads a table from a turso
//! database, and writes it to the configured output.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p fix-generator -- fix-generator.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `FIX_GENERATOR_CONFIG`: config path when no argument is given
//!   (default: fix-generator.yaml)
//! - `RUST_LOG`: log filter (default: `observability.logging.level`)

use anyhow::Context;
use fix_generator::config::{Config, InputConfig, load_config, resolve_config_path};
use fix_generator::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let path = resolve_config_path(std::env::args().nth(1));
    let config = load_config(Some(&path)).with_context(|| format!("loading {path}"))?;
    init_tracing(&config.observability.logging)?;

    tracing::info!(config = %path, "Starting FIX generator");
    log_config(&config);

    let rows = fix_generator::run(&config).await?;
    tracing::info!(rows, output = %config.output.path, "FIX generator finished");
    Ok(())
}

fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

fn log_config(config: &Config) {
    match &config.input {
        Some(InputConfig::Fix(fix)) => tracing::info!(
            input = "fix",
            tasks = fix.tasks,
            orders_per_task = fix.orders_per_task,
            max_order_quantity = config.generator.max_order_quantity,
            max_fill_quantity = config.generator.max_fill_quantity,
            seed = config.generator.seed,
            max_threads = config.parallel.max_threads,
            "Configuration loaded"
        ),
        Some(InputConfig::Store(store)) => tracing::info!(
            input = "store",
            connection = store.connection.as_deref(),
            table = store.table_name.as_deref(),
            "Configuration loaded"
        ),
        None => {}
    }
    tracing::info!(
        format = %config.output.format,
        path = %config.output.path,
        "Output configured"
    );
}
