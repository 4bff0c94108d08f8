//! Platform collaborators.
//!
//! Everything the launcher asks of the device goes through one of these
//! traits. Hosts implement them against the real OS; tests use mocks.

use std::sync::Arc;

use async_trait::async_trait;
use homebase_core::{Contact, PhoneNumber, Route};

use crate::error::PlatformError;

/// Installed-package queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Whether `package` is installed.
    async fn is_installed(&self, package: &str) -> Result<bool, PlatformError>;

    /// Launch an installed package.
    async fn open_package(&self, package: &str) -> Result<(), PlatformError>;
}

/// URL handling.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Linking: Send + Sync {
    /// Whether some handler on the device accepts `url`.
    async fn can_open_url(&self, url: &str) -> Result<bool, PlatformError>;

    /// Hand `url` to its handler.
    async fn open_url(&self, url: &str) -> Result<(), PlatformError>;
}

/// Screen navigation.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route) -> Result<(), PlatformError>;
}

/// User-visible alerts.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Calls and text messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Telephony: Send + Sync {
    /// Place a call without the dialer confirmation step.
    fn immediate_call(&self, number: &str) -> Result<(), PlatformError>;

    async fn voicemail_number(&self) -> Result<String, PlatformError>;

    async fn send_sms(&self, number: &str, body: &str) -> Result<(), PlatformError>;
}

/// The camera flash used as a flashlight.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Torch: Send + Sync {
    /// Ask for camera permission. `Ok(false)` means refused.
    async fn request_permission(&self) -> Result<bool, PlatformError>;

    /// Whether the torch is currently on.
    async fn status(&self) -> Result<bool, PlatformError>;

    async fn switch_state(&self, on: bool) -> Result<(), PlatformError>;
}

/// Fire-and-forget intents into other apps.
#[cfg_attr(test, mockall::automock)]
pub trait Intents: Send + Sync {
    fn open_camera(&self) -> Result<(), PlatformError>;

    fn open_maps(&self, query: &str) -> Result<(), PlatformError>;

    /// Open turn-by-turn directions. `mode` is the travel mode, `"d"` for driving.
    fn open_maps_with_route(&self, address: &str, mode: &str) -> Result<(), PlatformError>;
}

/// The address book.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Ask for read access. `Ok(false)` means refused.
    async fn request_permission(&self) -> Result<bool, PlatformError>;

    async fn all_contacts(&self) -> Result<Vec<Contact>, PlatformError>;

    /// Show the system picker. `None` when the user backs out.
    async fn select_contact_phone(&self) -> Result<Option<(Contact, PhoneNumber)>, PlatformError>;
}

/// Small persistent string store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, PlatformError>;

    async fn set_item(&self, key: &str, value: &str) -> Result<(), PlatformError>;
}

/// Handles to every platform collaborator.
#[derive(Clone)]
pub struct Device {
    pub packages: Arc<dyn PackageManager>,
    pub linking: Arc<dyn Linking>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub telephony: Arc<dyn Telephony>,
    pub torch: Arc<dyn Torch>,
    pub intents: Arc<dyn Intents>,
    pub contacts: Arc<dyn ContactSource>,
    pub storage: Arc<dyn KeyValueStore>,
}

impl Device {
    /// Use one object for every collaborator.
    pub fn from_platform<P>(platform: Arc<P>) -> Self
    where
        P: PackageManager
            + Linking
            + Navigator
            + Notifier
            + Telephony
            + Torch
            + Intents
            + ContactSource
            + KeyValueStore
            + 'static,
    {
        Self {
            packages: platform.clone(),
            linking: platform.clone(),
            navigator: platform.clone(),
            notifier: platform.clone(),
            telephony: platform.clone(),
            torch: platform.clone(),
            intents: platform.clone(),
            contacts: platform.clone(),
            storage: platform,
        }
    }

    /// Log a failure and show it to the user.
    pub fn alert_and_warn(&self, message: &str) {
        tracing::warn!("{}", message);
        self.notifier.alert(message);
    }
}
