//! A simulated phone driven by a `DeviceProfile`.
//!
//! Every effect the launcher has on the phone becomes a line of output:
//! alerts, screen changes, calls, texts and intents.

use async_trait::async_trait;
use parking_lot::Mutex;

use homebase_core::{Contact, PhoneNumber, Route};
use homebase_dispatch::{
    ContactSource, Intents, KeyValueStore, Linking, Navigator, Notifier, PackageManager,
    PlatformError, Telephony, Torch,
};

use crate::profile::DeviceProfile;
use crate::store::FileStore;

pub struct SimDevice {
    profile: DeviceProfile,
    store: FileStore,
    torch_on: Mutex<bool>,
    transcript: Mutex<Vec<String>>,
    echo: bool,
}

impl SimDevice {
    pub fn new(profile: DeviceProfile, store: FileStore) -> Self {
        Self {
            profile,
            store,
            torch_on: Mutex::new(false),
            transcript: Mutex::new(Vec::new()),
            echo: true,
        }
    }

    /// Keep output in the transcript only.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Every line emitted so far.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().clone()
    }

    fn emit(&self, line: String) {
        if self.echo {
            println!("{}", line);
        }
        self.transcript.lock().push(line);
    }
}

/// One line per route, plus the shortcuts it shows.
fn describe_route(route: &Route) -> Vec<String> {
    let mut lines = vec![format!("[screen] {}", route.screen())];
    match route {
        Route::Home { shortcuts } | Route::Extras { shortcuts } => {
            for shortcut in shortcuts {
                lines.push(format!("  {:<16} {}", shortcut.key, shortcut.name));
            }
        }
        Route::ContactList { descriptor } => {
            lines.push(format!("  pick a contact for {}", descriptor.name));
        }
        Route::Configure { defaults } => {
            lines.push(format!("  home address: {:?}", defaults.home_address));
        }
    }
    lines
}

#[async_trait]
impl PackageManager for SimDevice {
    async fn is_installed(&self, package: &str) -> Result<bool, PlatformError> {
        Ok(self.profile.is_installed(package))
    }

    async fn open_package(&self, package: &str) -> Result<(), PlatformError> {
        if !self.profile.is_installed(package) {
            return Err(PlatformError::Unavailable(package.to_string()));
        }
        self.emit(format!("[open] {}", package));
        Ok(())
    }
}

#[async_trait]
impl Linking for SimDevice {
    async fn can_open_url(&self, url: &str) -> Result<bool, PlatformError> {
        Ok(self.profile.can_open(url))
    }

    async fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        if !self.profile.can_open(url) {
            return Err(PlatformError::Unavailable(url.to_string()));
        }
        self.emit(format!("[url] {}", url));
        Ok(())
    }
}

impl Navigator for SimDevice {
    fn navigate(&self, route: Route) -> Result<(), PlatformError> {
        for line in describe_route(&route) {
            self.emit(line);
        }
        Ok(())
    }
}

impl Notifier for SimDevice {
    fn alert(&self, message: &str) {
        self.emit(format!("[alert] {}", message));
    }
}

#[async_trait]
impl Telephony for SimDevice {
    fn immediate_call(&self, number: &str) -> Result<(), PlatformError> {
        self.emit(format!("[call] {}", number));
        Ok(())
    }

    async fn voicemail_number(&self) -> Result<String, PlatformError> {
        if self.profile.voicemail.is_empty() {
            return Err(PlatformError::Unavailable("voicemail number".to_string()));
        }
        Ok(self.profile.voicemail.clone())
    }

    async fn send_sms(&self, number: &str, body: &str) -> Result<(), PlatformError> {
        self.emit(format!("[sms] {}: {}", number, body));
        Ok(())
    }
}

#[async_trait]
impl Torch for SimDevice {
    async fn request_permission(&self) -> Result<bool, PlatformError> {
        Ok(self.profile.camera_permission)
    }

    async fn status(&self) -> Result<bool, PlatformError> {
        Ok(*self.torch_on.lock())
    }

    async fn switch_state(&self, on: bool) -> Result<(), PlatformError> {
        if !self.profile.camera_permission {
            return Err(PlatformError::PermissionDenied("camera".to_string()));
        }
        *self.torch_on.lock() = on;
        self.emit(format!("[torch] {}", if on { "on" } else { "off" }));
        Ok(())
    }
}

impl Intents for SimDevice {
    fn open_camera(&self) -> Result<(), PlatformError> {
        self.emit("[camera] opened".to_string());
        Ok(())
    }

    fn open_maps(&self, query: &str) -> Result<(), PlatformError> {
        self.emit(format!("[maps] {}", query));
        Ok(())
    }

    fn open_maps_with_route(&self, address: &str, mode: &str) -> Result<(), PlatformError> {
        self.emit(format!("[maps] route to {} ({})", address, mode));
        Ok(())
    }
}

#[async_trait]
impl ContactSource for SimDevice {
    async fn request_permission(&self) -> Result<bool, PlatformError> {
        Ok(self.profile.contacts_permission)
    }

    async fn all_contacts(&self) -> Result<Vec<Contact>, PlatformError> {
        Ok(self.profile.contacts.clone())
    }

    async fn select_contact_phone(&self) -> Result<Option<(Contact, PhoneNumber)>, PlatformError> {
        let Some(contact) = self.profile.picked() else {
            return Ok(None);
        };
        Ok(contact
            .phone_numbers
            .first()
            .cloned()
            .map(|phone| (contact.clone(), phone)))
    }
}

#[async_trait]
impl KeyValueStore for SimDevice {
    async fn get_item(&self, key: &str) -> Result<Option<String>, PlatformError> {
        self.store.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.store.set_item(key, value).await
    }
}
