//! Launcher configuration.
//!
//! Read from `config.toml` in the Homebase config directory. A missing file
//! means defaults; a file that exists but fails to parse is an error.
//!
//! ```toml
//! store_url_prefix = "market://launch?id="
//! launcher_package = "shubh.ruthless"
//! settings_package = "com.android.settings"
//! emergency_call_wait_secs = 60
//!
//! [[extras]]
//! key = "podcasts"
//! name = "Podcasts"
//! icon = "radio"
//! package = "com.google.android.apps.podcasts"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::action::ShortcutConfig;
use crate::error::ConfigError;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Prefix that turns a package id into an app store URL.
    pub store_url_prefix: String,

    /// Package of the stock launcher, reachable from the configure screen.
    pub launcher_package: String,

    /// Package of the system settings app.
    pub settings_package: String,

    /// Pause after each emergency call before dialing the next contact.
    pub emergency_call_wait_secs: u64,

    /// Shortcuts appended to the Extras screen.
    pub extras: Vec<ShortcutConfig>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            store_url_prefix: "market://launch?id=".to_string(),
            launcher_package: "shubh.ruthless".to_string(),
            settings_package: "com.android.settings".to_string(),
            emergency_call_wait_secs: 60,
            extras: Vec::new(),
        }
    }
}

impl LauncherConfig {
    pub fn emergency_call_wait(&self) -> Duration {
        Duration::from_secs(self.emergency_call_wait_secs)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text, path)?;
        tracing::info!(
            "Loaded config from {:?} ({} extra shortcuts)",
            path,
            config.extras.len()
        );
        Ok(config)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("homebase"))
}

/// Get the path to config.toml.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|p| p.join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}
