// ABOUTME: Manager configuration loaded from a TOML file in the user config dir
// Supplies container id, class names and defaults used when creating notifications

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";
const APP_NAME: &str = "toast-stack";

/// Failure reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`ManagerConfig`].
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be turned into TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings shared by every notification a manager creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Identifier of the container element.
    pub container_id: String,
    /// Class every notification element carries.
    pub base_class: String,
    /// Container class while any notification is live.
    pub visible_class: String,
    /// Container class once the stack is empty.
    pub hidden_class: String,
    /// Text used when a create config has none.
    pub default_text: String,
    /// Default element names are `{name_prefix}{id}`.
    pub name_prefix: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            container_id: crate::container::DEFAULT_CONTAINER_ID.to_string(),
            base_class: "notification".to_string(),
            visible_class: "show".to_string(),
            hidden_class: "hide".to_string(),
            default_text: "This is a notification".to_string(),
            name_prefix: "Notifications-".to_string(),
        }
    }
}

/// `<config_dir>/toast-stack/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the user config, falling back to defaults when no file exists.
pub fn load() -> Result<ManagerConfig, ConfigError> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ManagerConfig::default())
}

/// Reads a config file. Fields missing from it keep their defaults.
pub fn load_from_path(path: &Path) -> Result<ManagerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `config` as TOML, creating parent directories.
pub fn save_to_path(config: &ManagerConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
