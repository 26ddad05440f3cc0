use anyhow::Result;
use h256conv_common::utils::config::load_config;
use h256conv_common::utils::logging::LoggingConfig;
use std::path::Path;

/// Resolves logging settings: the file when given, defaults otherwise.
/// `verbose` forces the `debug` level.
pub fn load_logging_config(path: Option<&Path>, verbose: bool) -> Result<LoggingConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => LoggingConfig::default(),
    };

    if verbose {
        config.level = "debug".to_string();
    }

    Ok(config)
}
