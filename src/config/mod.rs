//! Configuration module
//!
//! Handles loading and saving of advlog.toml configuration files.
//! Defines Config, Actor, and Logging types.

mod types;

pub use types::{Actor, Config, Logging};

use crate::error::{AdvlogError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        AdvlogError::Config(format!(
            "Cannot read config from '{}': {}. Run 'advlog config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| AdvlogError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, toml)?;
    Ok(())
}
