use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to include target/module
    #[serde(default = "default_include_target")]
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            include_target: default_include_target(),
        }
    }
}

// Default values
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }
fn default_include_target() -> bool { false }

/// Log format types
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl From<&str> for LogFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

/// Initialize logging system.
///
/// Diagnostics go to stderr; stdout is reserved for conversion output.
/// A subscriber that is already installed is left in place.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = build_env_filter(config, rust_log.as_deref())?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.include_target)
        .with_writer(std::io::stderr);

    let installed = match LogFormat::from(config.format.as_str()) {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Pretty => subscriber.pretty().try_init(),
        LogFormat::Compact => subscriber.compact().try_init(),
    };

    match installed {
        Ok(()) => tracing::info!("Logging system initialized with level: {}", config.level),
        Err(err) => tracing::debug!("Keeping existing subscriber: {}", err),
    }
    Ok(())
}

/// Build environment filter from configuration.
///
/// `rust_log` directives are appended to the configured level. Directives
/// that fail to parse are dropped; only a bad configured level is an error.
fn build_env_filter(config: &LoggingConfig, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let base = EnvFilter::try_new(&config.level)?;

    let rust_log = match rust_log {
        Some(rust_log) if !rust_log.is_empty() => rust_log,
        _ => return Ok(base),
    };

    match EnvFilter::try_new(format!("{},{}", config.level, rust_log)) {
        Ok(filter) => Ok(filter),
        Err(err) => {
            eprintln!("Ignoring invalid RUST_LOG {:?}: {}", rust_log, err);
            Ok(base)
        }
    }
}

/// Initialize logging for testing
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .try_init();
}
