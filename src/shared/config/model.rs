use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the broker, e.g. `http://localhost:8082`
    #[serde(default = "default_broker_url")]
    pub broker_url: String,
    /// Upper bound for a single store round trip
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broker_url: default_broker_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryConfig {
    /// Row cap applied when the request carries no usable limit
    #[serde(default = "default_row_limit")]
    pub row_limit: u32,
    /// Name of the count aggregate, both as column and as rollup field
    #[serde(default = "default_metric")]
    pub metric: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            row_limit: default_row_limit(),
            metric: default_metric(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_broker_url() -> String {
    "http://localhost:8082".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_row_limit() -> u32 {
    5_000
}

fn default_metric() -> String {
    "count".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("PANORAMIX_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads `path` (any format the `config` crate recognizes, extension optional),
/// then overlays `PANORAMIX__SECTION__KEY` environment variables.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("PANORAMIX").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
