use crate::config::types::AppConfig;
use shellexpand::full;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("vault config file not found at {0}")]
    NotFound(String),

    #[error("failed to read vault config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    ParseError(String, #[source] serde_json::Error),

    #[error("cannot expand path '{0}'")]
    Expand(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `<vault_root>/.obsidian/app.json`.
    pub fn load(vault_root: &Path) -> Result<AppConfig, ConfigError> {
        let path = app_config_path(vault_root);

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        serde_json::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))
    }

    /// Resolve the attachment directory of the vault at `vault_root`.
    pub fn attachment_dir(vault_root: &Path) -> Result<PathBuf, ConfigError> {
        let cfg = Self::load(vault_root)?;
        Ok(vault_root.join(cfg.attachment_folder()))
    }
}

pub fn app_config_path(vault_root: &Path) -> PathBuf {
    vault_root.join(".obsidian").join("app.json")
}

/// Expand `~` and environment variables in a user supplied path.
pub fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::Expand(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
