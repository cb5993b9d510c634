use std::path::Path;

use anyhow::{Context, Result};
use docport_core::DocportConfig;
use log::debug;

pub const DEFAULT_CONFIG_FILE: &str = "docport.yaml";

/// Explicit file first, then `./docport.yaml`, then built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<DocportConfig> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            debug!("no config file, using defaults");
            return Ok(DocportConfig::default());
        }
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = DocportConfig::from_yaml(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;

    debug!("loaded config from {}", path.display());
    Ok(config)
}
