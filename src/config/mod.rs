mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`.
///
/// Without `CONFIG_PATH`, a missing `config.yaml` falls back to the built-in
/// defaults. A path given explicitly must exist.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => {
            info!(
                "No {} found, using built-in configuration",
                DEFAULT_CONFIG_PATH
            );
            Ok(Config::default())
        }
        Err(_) => load_from(DEFAULT_CONFIG_PATH).await,
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
