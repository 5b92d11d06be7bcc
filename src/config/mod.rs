mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::path::Path;
use tracing::debug;

/// Loads the configuration from `CONFIG_PATH` (default `config.yaml`).
///
/// A missing file is not an error: the service falls back to the built-in
/// defaults (loopback bind, fixed artifact path) so an unconfigured process
/// still comes up.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    if !Path::new(&config_path).exists() {
        debug!(
            "No configuration file at {}, using built-in defaults",
            config_path
        );
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
