//! Device profiles.
//!
//! A profile describes the phone being simulated: which packages are
//! installed, which URL schemes have a handler, the address book, and how
//! the permission prompts are answered. Read from `device.toml` next to the
//! launcher config.
//!
//! ```toml
//! installed = ["com.spotify.music", "com.ubercab"]
//! url_handlers = ["tel:", "whatsapp://"]
//! voicemail = "+15550100"
//! picked_contact = "2"
//!
//! [[contacts]]
//! record_id = "2"
//! given_name = "Ann"
//! family_name = "Lee"
//! is_starred = true
//! phone_numbers = [{ label = "mobile", number = "(555) 123-4567" }]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use homebase_core::{config_dir, ConfigError, Contact};

use crate::error::SimError;

/// The simulated phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    /// Installed package ids. The stock settings app is installed by default.
    pub installed: Vec<String>,

    /// URL prefixes some installed app can handle.
    pub url_handlers: Vec<String>,

    pub voicemail: String,

    pub contacts: Vec<Contact>,

    /// Record id returned by the system contact picker. Unset means the
    /// user backs out of the picker.
    pub picked_contact: Option<String>,

    pub contacts_permission: bool,

    pub camera_permission: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            installed: vec!["com.android.settings".to_string()],
            url_handlers: vec!["tel:".to_string(), "market://".to_string()],
            voicemail: String::new(),
            contacts: Vec::new(),
            picked_contact: None,
            contacts_permission: true,
            camera_permission: true,
        }
    }
}

impl DeviceProfile {
    /// Load a profile, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        if !path.exists() {
            tracing::info!("No device profile at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| SimError::Profile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let profile: Self = toml::from_str(&text).map_err(|e| SimError::Profile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(
            "Loaded device profile from {:?} ({} packages, {} contacts)",
            path,
            profile.installed.len(),
            profile.contacts.len()
        );
        Ok(profile)
    }

    pub fn is_installed(&self, package: &str) -> bool {
        self.installed.iter().any(|p| p == package)
    }

    pub fn can_open(&self, url: &str) -> bool {
        self.url_handlers.iter().any(|prefix| url.starts_with(prefix.as_str()))
    }

    pub fn picked(&self) -> Option<&Contact> {
        let id = self.picked_contact.as_deref()?;
        self.contacts.iter().find(|c| c.record_id == id)
    }
}

/// Path to `device.toml`.
pub fn profile_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|p| p.join("device.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Path to the simulated phone's key-value storage.
pub fn store_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|p| p.join("storage.json"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let profile = DeviceProfile::load(&dir.path().join("device.toml")).unwrap();
        assert_eq!(profile, DeviceProfile::default());
        assert!(profile.is_installed("com.android.settings"));
        assert!(profile.can_open("tel:5551234"));
        assert!(!profile.can_open("whatsapp://send?phone=1"));
    }

    #[test]
    fn test_profile_parses_contacts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.toml");
        std::fs::write(
            &path,
            r#"
            installed = ["com.ubercab"]
            url_handlers = ["whatsapp://"]
            picked_contact = "2"
            camera_permission = false

            [[contacts]]
            record_id = "2"
            given_name = "Ann"
            family_name = "Lee"
            phone_numbers = [{ label = "mobile", number = "555" }]
            "#,
        )
        .unwrap();

        let profile = DeviceProfile::load(&path).unwrap();
        assert!(profile.is_installed("com.ubercab"));
        assert!(!profile.is_installed("com.whatsapp"));
        assert!(profile.can_open("whatsapp://send?phone=555"));
        assert!(!profile.camera_permission);
        assert!(profile.contacts_permission);
        assert_eq!(profile.picked().map(|c| c.given_name.as_str()), Some("Ann"));
    }

    #[test]
    fn test_bad_profile_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.toml");
        std::fs::write(&path, "installed = 3").unwrap();
        assert!(matches!(
            DeviceProfile::load(&path),
            Err(SimError::Profile { .. })
        ));
    }
}
