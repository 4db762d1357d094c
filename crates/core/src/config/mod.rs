//! Obsidian vault configuration (`.obsidian/app.json`).

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, app_config_path, expand_path};
pub use types::AppConfig;
