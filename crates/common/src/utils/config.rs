use anyhow::{Context, Result};
use ::config::{Config, File};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads configuration from a file into a struct.
/// Supports TOML, YAML, JSON, etc. based on file extension.
pub fn load_config<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let settings = Config::builder()
        .add_source(File::from(path.as_ref()).required(true))
        .build()
        .with_context(|| format!("Failed to build configuration from {:?}", path.as_ref()))?;

    settings.try_deserialize::<T>().context("Failed to deserialize configuration")
}
