mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    load_from(&config_path, env::var("PREDICTOR_URL").ok()).await
}

pub async fn load_from(config_path: impl AsRef<Path>, predictor_url: Option<String>) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str, predictor_url)
}

/// Parses a YAML document and applies the `PREDICTOR_URL` override, if any.
pub fn parse(config_str: &str, predictor_url: Option<String>) -> Result<Config> {
    let mut config: Config = serde_yaml::from_str(config_str)?;

    if let Some(url) = predictor_url {
        debug!("Predictor URL overridden from environment: {}", url);
        config.predictor.url = url;
    }

    if config.predictor.url.trim().is_empty() {
        return Err(Error::config("predictor.url must not be empty"));
    }
    if config.predictor.timeout_secs == 0 {
        return Err(Error::config("predictor.timeout_secs must be greater than zero"));
    }

    Ok(config)
}
