use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use expiry_core::{load_dotenv, QuantizerConfig};

/// Load class policies from a TOML file, or from the environment when no
/// path is given.
pub fn load(path: Option<&str>) -> Result<QuantizerConfig> {
    let config = match path {
        Some(p) => {
            let config_path = Path::new(p);
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            toml::from_str::<QuantizerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?
        }
        None => {
            load_dotenv();
            debug!("No config file given, reading environment");
            QuantizerConfig::from_env()
        }
    };
    config.validate().context("invalid quantizer config")?;
    Ok(config)
}
