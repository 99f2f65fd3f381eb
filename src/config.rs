//! Uploader configuration file
//!
//! Optional JSON settings for programs built on this crate. The library
//! never reads this on its own; callers load it and pass the values on.
//! The default location is the platform config directory under
//! "catbox-uploader/".

use crate::error::ConfigError;
use crate::types::Retention;
use crate::uploader::Uploader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR_NAME: &str = "catbox-uploader";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for a program that uploads files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    /// Catbox account token (user hash), if uploads should be linked to an account
    pub user_hash: Option<String>,
    pub retention: Retention,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            user_hash: None,
            retention: Retention::OneHour,
            timeout_secs: 10,
            user_agent: None,
        }
    }
}

impl UploaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn account_token(&self) -> Option<&str> {
        self.user_hash.as_deref()
    }

    /// Build an uploader honoring `user_agent`
    pub fn uploader(&self) -> Uploader {
        match &self.user_agent {
            Some(user_agent) => Uploader::new().with_user_agent(user_agent.clone()),
            None => Uploader::new(),
        }
    }
}

/// Get the config directory path.
///
/// Returns: `~/.config/catbox-uploader` (Linux)
///          `~/Library/Application Support/catbox-uploader` (macOS)
///          `C:\Users\<User>\AppData\Roaming\catbox-uploader` (Windows)
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join(APP_DIR_NAME))
}

/// Default path of the config file
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the config file at `path`.
///
/// # Returns
/// * `Ok(Some(config))` if the file exists and parsed
/// * `Ok(None)` if the file doesn't exist
/// * `Err(...)` if the file exists but couldn't be read or parsed
pub fn load_config_file(path: &Path) -> Result<Option<UploaderConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(config))
}

/// Save `config` to `path` as pretty JSON, creating parent directories.
pub fn save_config_file(path: &Path, config: &UploaderConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(config)?;

    fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
