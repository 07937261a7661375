//! Application configuration
//!
//! Non-sensitive settings stored as `config.toml` next to the vault file.
//! A missing file means defaults; an unreadable one is a configuration
//! error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{VaultError, VaultResult};
use crate::generator::GeneratorConfig;

/// Config file name
const CONFIG_FILE: &str = "config.toml";

/// Get the config file path
pub fn config_file_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generator settings used when the caller passes no overrides
    pub generator: GeneratorConfig,

    /// Ask before deleting an entry
    pub confirm_delete: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            confirm_delete: true,
        }
    }
}

/// Load configuration, falling back to defaults when no file exists
pub async fn load_config(base_dir: &Path) -> VaultResult<AppConfig> {
    let path = config_file_path(base_dir);
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path).await?;
    toml::from_str(&content).map_err(|e| VaultError::Config(e.to_string()))
}

/// Save configuration
pub async fn save_config(base_dir: &Path, config: &AppConfig) -> VaultResult<()> {
    fs::create_dir_all(base_dir).await?;

    let path = config_file_path(base_dir);
    let content = toml::to_string_pretty(config).map_err(|e| VaultError::Config(e.to_string()))?;
    fs::write(&path, content).await?;

    Ok(())
}
