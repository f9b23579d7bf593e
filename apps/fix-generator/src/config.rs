//! Configuration module for the FIX generator.
//!
//! Loads a YAML file, interpolates environment variables and validates every
//! value before any work starts. Validation errors name the offending key in
//! dotted form (`input.tasks`, `generator.max_fill_quantity`, ...).
//!
//! # Usage
//!
//! ```rust,ignore
//! use fix_generator::config::{load_config, resolve_config_path};
//!
//! let path = resolve_config_path(std::env::args().nth(1));
//! let config = load_config(Some(&path))?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::use_cases::GenerationPlan;
use crate::domain::order_lifecycle::{
    DEFAULT_MAX_FILL_QUANTITY, DEFAULT_MAX_ORDER_QUANTITY, DEFAULT_MAX_TIME_STEP_MS,
    LifecycleError, OrderLimits,
};
use crate::infrastructure::fix::SOH;
use crate::infrastructure::parallel::ParallelConfig;
use crate::infrastructure::sink::{OutputFormat, STDOUT_PATH};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "fix-generator.yaml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "FIX_GENERATOR_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// A required key is absent.
    #[error("Missing required config key '{key}'")]
    MissingKey {
        /// Dotted key name.
        key: String,
    },

    /// A key has an unusable value.
    #[error("Invalid value for config key '{key}': {reason}")]
    InvalidValue {
        /// Dotted key name.
        key: String,
        /// What is wrong with the value.
        reason: String,
    },
}

impl ConfigError {
    fn missing(key: &str) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }

    fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Row source selection.
    #[serde(default)]
    pub input: Option<InputConfig>,
    /// Generator limits and encoding.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Parallel execution configuration.
    #[serde(default)]
    pub parallel: ParallelConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Row source selection, keyed by `input.type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputConfig {
    /// Generate synthetic FIX messages.
    Fix(FixInputConfig),
    /// Read a table from a turso database.
    Store(StoreInputConfig),
}

/// Work distribution of the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixInputConfig {
    /// Number of parallel generation units.
    #[serde(default)]
    pub tasks: Option<i64>,
    /// Orders generated per unit.
    #[serde(default)]
    pub orders_per_task: Option<i64>,
}

/// Table to read from a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreInputConfig {
    /// Database path.
    #[serde(default)]
    pub connection: Option<String>,
    /// Table name.
    #[serde(default)]
    pub table_name: Option<String>,
}

impl StoreInputConfig {
    /// Database path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is absent or blank.
    pub fn connection(&self) -> Result<&str, ConfigError> {
        required_text("input.connection", self.connection.as_deref())
    }

    /// Table name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is absent or blank.
    pub fn table_name(&self) -> Result<&str, ConfigError> {
        required_text("input.table_name", self.table_name.as_deref())
    }
}

/// Generator limits and encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Exclusive upper bound of an order's quantity.
    #[serde(default = "default_max_order_quantity")]
    pub max_order_quantity: i64,
    /// Exclusive upper bound of a single fill.
    #[serde(default = "default_max_fill_quantity")]
    pub max_fill_quantity: i64,
    /// Inclusive upper bound of the step between events, in ms.
    #[serde(default = "default_max_time_step_ms")]
    pub max_time_step_ms: i64,
    /// Base seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<i64>,
    /// Field separator, exactly one character.
    #[serde(default = "default_field_separator")]
    pub field_separator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_order_quantity: default_max_order_quantity(),
            max_fill_quantity: default_max_fill_quantity(),
            max_time_step_ms: default_max_time_step_ms(),
            seed: None,
            field_separator: default_field_separator(),
        }
    }
}

const fn default_max_order_quantity() -> i64 {
    DEFAULT_MAX_ORDER_QUANTITY as i64
}
const fn default_max_fill_quantity() -> i64 {
    DEFAULT_MAX_FILL_QUANTITY as i64
}
const fn default_max_time_step_ms() -> i64 {
    DEFAULT_MAX_TIME_STEP_MS as i64
}
fn default_field_separator() -> String {
    SOH.to_string()
}

impl GeneratorConfig {
    /// Validated draw bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first out-of-range limit.
    pub fn limits(&self) -> Result<OrderLimits, ConfigError> {
        let order = to_u32("generator.max_order_quantity", self.max_order_quantity)?;
        let fill = to_u32("generator.max_fill_quantity", self.max_fill_quantity)?;
        let step = to_u32("generator.max_time_step_ms", self.max_time_step_ms)?;

        OrderLimits::new(order, fill, step).map_err(|e| match e {
            LifecycleError::InvalidLimit { name, minimum } => ConfigError::invalid(
                &format!("generator.{name}"),
                format!("must be at least {minimum}"),
            ),
            other => ConfigError::invalid("generator", other.to_string()),
        })
    }

    /// Validated base seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the seed is negative.
    pub fn seed(&self) -> Result<Option<u64>, ConfigError> {
        self.seed
            .map(|seed| {
                u64::try_from(seed)
                    .map_err(|_| ConfigError::invalid("generator.seed", "must not be negative"))
            })
            .transpose()
    }

    /// Validated field separator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` unless the separator is exactly one character.
    pub fn separator(&self) -> Result<char, ConfigError> {
        let mut chars = self.field_separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::invalid(
                "generator.field_separator",
                "must be exactly one character",
            )),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Output path; `-` writes lines to stdout.
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    "fix.arrow".to_string()
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Selected input.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` if the `input` section is absent.
    pub fn input(&self) -> Result<&InputConfig, ConfigError> {
        self.input.as_ref().ok_or_else(|| ConfigError::missing("input"))
    }

    /// Build the generation plan for a FIX input.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first missing or invalid key.
    pub fn generation_plan(&self, input: &FixInputConfig) -> Result<GenerationPlan, ConfigError> {
        Ok(GenerationPlan {
            tasks: positive_count("input.tasks", input.tasks)?,
            orders_per_task: positive_count("input.orders_per_task", input.orders_per_task)?,
            limits: self.generator.limits()?,
            seed: self.generator.seed()?,
        })
    }
}

/// Pick the config path: explicit argument, then `FIX_GENERATOR_CONFIG`,
/// then `fix-generator.yaml`.
#[must_use]
pub fn resolve_config_path(arg: Option<String>) -> String {
    arg.filter(|a| !a.is_empty())
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
///
/// # Errors
///
/// Returns `ConfigError` naming the first missing or invalid key.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    match config.input()? {
        InputConfig::Fix(fix) => {
            config.generation_plan(fix)?;
            config.generator.separator()?;
        }
        InputConfig::Store(store) => {
            store.connection()?;
            store.table_name()?;
        }
    }

    if config.output.path.trim().is_empty() {
        return Err(ConfigError::invalid("output.path", "must not be empty"));
    }
    if config.output.format == OutputFormat::Ipc && config.output.path == STDOUT_PATH {
        return Err(ConfigError::invalid(
            "output.path",
            "ipc output requires a file path",
        ));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::invalid(
            "observability.logging.level",
            "must not be empty",
        ));
    }

    Ok(())
}

fn positive_count(key: &str, value: Option<i64>) -> Result<usize, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::missing(key))?;
    if value < 1 {
        return Err(ConfigError::invalid(key, format!("must be at least 1, got {value}")));
    }
    usize::try_from(value).map_err(|_| ConfigError::invalid(key, "too large"))
}

fn to_u32(key: &str, value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value)
        .map_err(|_| ConfigError::invalid(key, format!("must be between 0 and {}", u32::MAX)))
}

fn required_text<'a>(key: &str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        None => Err(ConfigError::missing(key)),
        Some("") => Err(ConfigError::invalid(key, "must not be empty")),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn fix_yaml(input: &str) -> String {
        format!("input:\n  type: fix\n{input}")
    }

    fn key_of(err: &ConfigError) -> Option<&str> {
        match err {
            ConfigError::MissingKey { key } | ConfigError::InvalidValue { key, .. } => {
                Some(key.as_str())
            }
            _ => None,
        }
    }

    #[test]
    fn minimal_fix_config_uses_defaults() {
        let config =
            load_config_from_string(&fix_yaml("  tasks: 2\n  orders_per_task: 10\n")).unwrap();

        let InputConfig::Fix(fix) = config.input().unwrap() else {
            panic!("expected fix input");
        };
        let plan = config.generation_plan(fix).unwrap();
        assert_eq!(plan.tasks, 2);
        assert_eq!(plan.orders_per_task, 10);
        assert_eq!(plan.limits, OrderLimits::default());
        assert_eq!(plan.seed, None);
        assert_eq!(config.generator.separator().unwrap(), SOH);
        assert_eq!(config.output.format, OutputFormat::Ipc);
        assert_eq!(config.output.path, "fix.arrow");
        assert_eq!(config.observability.logging.format, LogFormat::Json);
        assert_eq!(config.parallel, ParallelConfig::default());
    }

    #[test]
    fn full_fix_config() {
        let yaml = r#"
input:
  type: fix
  tasks: 8
  orders_per_task: 1000
generator:
  max_order_quantity: 500
  max_fill_quantity: 100
  max_time_step_ms: 3
  seed: 42
  field_separator: "|"
parallel:
  max_threads: 4
  min_parallel_units: 1
output:
  format: lines
  path: "-"
observability:
  logging:
    level: debug
    format: pretty
"#;
        let config = load_config_from_string(yaml).unwrap();

        assert_eq!(config.generator.separator().unwrap(), '|');
        assert_eq!(config.generator.limits().unwrap(), OrderLimits::new(500, 100, 3).unwrap());
        assert_eq!(config.generator.seed().unwrap(), Some(42));
        assert_eq!(config.parallel.max_threads, 4);
        assert_eq!(config.output.format, OutputFormat::Lines);
        assert_eq!(config.output.path, STDOUT_PATH);
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.observability.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn store_config() {
        let yaml = "input:\n  type: store\n  connection: data/fills.db\n  table_name: fills\n";
        let config = load_config_from_string(yaml).unwrap();

        let InputConfig::Store(store) = config.input().unwrap() else {
            panic!("expected store input");
        };
        assert_eq!(store.connection().unwrap(), "data/fills.db");
        assert_eq!(store.table_name().unwrap(), "fills");
    }

    #[test_case(&fix_yaml("  orders_per_task: 1\n"), "input.tasks" ; "missing tasks")]
    #[test_case(&fix_yaml("  tasks: 1\n"), "input.orders_per_task" ; "missing orders")]
    #[test_case(&fix_yaml("  tasks: 0\n  orders_per_task: 1\n"), "input.tasks" ; "zero tasks")]
    #[test_case(&fix_yaml("  tasks: 1\n  orders_per_task: -5\n"), "input.orders_per_task" ; "negative orders")]
    #[test_case("input:\n  type: store\n  table_name: t\n", "input.connection" ; "missing connection")]
    #[test_case("input:\n  type: store\n  connection: a.db\n", "input.table_name" ; "missing table")]
    #[test_case("input:\n  type: store\n  connection: a.db\n  table_name: ' '\n", "input.table_name" ; "blank table")]
    #[test_case("generator:\n  seed: 1\n", "input" ; "missing input")]
    fn invalid_config_names_key(yaml: &str, key: &str) {
        let err = load_config_from_string(yaml).unwrap_err();
        assert_eq!(key_of(&err), Some(key), "unexpected error: {err}");
    }

    #[test_case("max_order_quantity: 0", "generator.max_order_quantity" ; "zero order bound")]
    #[test_case("max_fill_quantity: 1", "generator.max_fill_quantity" ; "fill bound of one")]
    #[test_case("max_time_step_ms: 0", "generator.max_time_step_ms" ; "zero step")]
    #[test_case("max_fill_quantity: -3", "generator.max_fill_quantity" ; "negative fill bound")]
    #[test_case("field_separator: \"||\"", "generator.field_separator" ; "long separator")]
    #[test_case("field_separator: \"\"", "generator.field_separator" ; "empty separator")]
    #[test_case("seed: -1", "generator.seed" ; "negative seed")]
    fn invalid_generator_names_key(generator: &str, key: &str) {
        let yaml = format!("{}generator:\n  {generator}\n", fix_yaml("  tasks: 1\n  orders_per_task: 1\n"));
        let err = load_config_from_string(&yaml).unwrap_err();
        assert_eq!(key_of(&err), Some(key), "unexpected error: {err}");
    }

    #[test]
    fn ipc_to_stdout_is_invalid() {
        let yaml = format!(
            "{}output:\n  format: ipc\n  path: \"-\"\n",
            fix_yaml("  tasks: 1\n  orders_per_task: 1\n")
        );
        let err = load_config_from_string(&yaml).unwrap_err();
        assert_eq!(key_of(&err), Some("output.path"));
    }

    #[test]
    fn unknown_input_type_is_parse_error() {
        let err = load_config_from_string("input:\n  type: kafka\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_config(Some("/nonexistent/fix-generator.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fix-generator.yaml");
        std::fs::write(&path, fix_yaml("  tasks: 3\n  orders_per_task: 4\n")).unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert!(matches!(config.input, Some(InputConfig::Fix(_))));
    }

    #[test]
    fn env_var_with_default_when_missing() {
        let input = "tasks: ${FIX_GENERATOR_TEST_NONEXISTENT_VAR:-4}";
        assert_eq!(interpolate_env_vars(input), "tasks: 4");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn env_var_with_default_uses_existing() {
        let result = interpolate_env_vars("path: ${PATH:-default}");
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn env_var_without_default_becomes_empty() {
        let input = "connection: ${FIX_GENERATOR_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "connection: ");
    }

    #[test]
    fn explicit_config_path_wins() {
        assert_eq!(resolve_config_path(Some("custom.yaml".to_string())), "custom.yaml");
    }
}
