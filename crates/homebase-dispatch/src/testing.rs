//! Recording fake device for tests.
//!
//! Implements every collaborator, answers from canned state, and records each
//! call in order so tests can assert on the exact sequence.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use homebase_core::{AppData, Contact, PhoneNumber, Route, Screen, APP_DATA_KEY};

use crate::error::PlatformError;
use crate::platform::{
    ContactSource, Device, Intents, KeyValueStore, Linking, Navigator, Notifier, PackageManager,
    Telephony, Torch,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IsInstalled(String),
    OpenPackage(String),
    CanOpenUrl(String),
    OpenUrl(String),
    Navigate(Screen),
    Alert(String),
    ImmediateCall(String),
    VoicemailNumber,
    SendSms(String, String),
    TorchPermission,
    TorchStatus,
    TorchSwitch(bool),
    OpenCamera,
    OpenMaps(String),
    OpenMapsWithRoute(String, String),
    ContactsPermission,
    AllContacts,
    SelectContactPhone,
    GetItem(String),
    SetItem(String, String),
}

#[derive(Default)]
pub struct RecordingDevice {
    calls: Mutex<Vec<Call>>,
    routes: Mutex<Vec<Route>>,
    installed: HashSet<String>,
    broken_install_checks: HashSet<String>,
    openable: Vec<String>,
    fail_open_url: bool,
    fail_open_package: bool,
    fail_sms: bool,
    deny_torch: bool,
    torch_on: Mutex<bool>,
    contacts: Option<Vec<Contact>>,
    picked: Option<(Contact, PhoneNumber)>,
    voicemail: String,
    storage: Mutex<HashMap<String, String>>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self {
            contacts: Some(Vec::new()),
            voicemail: "5550000".to_string(),
            ..Default::default()
        }
    }

    pub fn with_installed(mut self, package: &str) -> Self {
        self.installed.insert(package.to_string());
        self
    }

    /// Make `is_installed(package)` fail.
    pub fn with_broken_install_check(mut self, package: &str) -> Self {
        self.broken_install_checks.insert(package.to_string());
        self
    }

    /// URLs starting with `prefix` can be opened.
    pub fn with_openable(mut self, prefix: &str) -> Self {
        self.openable.push(prefix.to_string());
        self
    }

    pub fn with_failing_open_url(mut self) -> Self {
        self.fail_open_url = true;
        self
    }

    pub fn with_failing_open_package(mut self) -> Self {
        self.fail_open_package = true;
        self
    }

    pub fn with_failing_sms(mut self) -> Self {
        self.fail_sms = true;
        self
    }

    pub fn with_torch_denied(mut self) -> Self {
        self.deny_torch = true;
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = Some(contacts);
        self
    }

    /// Make `all_contacts()` fail.
    pub fn with_broken_contacts(mut self) -> Self {
        self.contacts = None;
        self
    }

    pub fn with_picked(mut self, contact: Contact, phone: PhoneNumber) -> Self {
        self.picked = Some((contact, phone));
        self
    }

    pub fn with_app_data(self, data: &AppData) -> Self {
        self.with_stored(APP_DATA_KEY, &serde_json::to_string(data).unwrap())
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn into_device(self) -> (Arc<Self>, Device) {
        let recorder = Arc::new(self);
        let device = Device::from_platform(recorder.clone());
        (recorder, device)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.lock().get(key).cloned()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
        self.routes.lock().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

pub fn contact(id: &str, given: &str, family: &str, number: &str) -> Contact {
    Contact {
        record_id: id.to_string(),
        given_name: given.to_string(),
        family_name: family.to_string(),
        is_starred: false,
        phone_numbers: vec![PhoneNumber::new("mobile", number)],
    }
}

fn failure(what: &str) -> PlatformError {
    PlatformError::Failed(format!("{} failed", what))
}

#[async_trait]
impl PackageManager for RecordingDevice {
    async fn is_installed(&self, package: &str) -> Result<bool, PlatformError> {
        self.record(Call::IsInstalled(package.to_string()));
        if self.broken_install_checks.contains(package) {
            return Err(failure("is_installed"));
        }
        Ok(self.installed.contains(package))
    }

    async fn open_package(&self, package: &str) -> Result<(), PlatformError> {
        self.record(Call::OpenPackage(package.to_string()));
        if self.fail_open_package {
            return Err(failure("open_package"));
        }
        Ok(())
    }
}

#[async_trait]
impl Linking for RecordingDevice {
    async fn can_open_url(&self, url: &str) -> Result<bool, PlatformError> {
        self.record(Call::CanOpenUrl(url.to_string()));
        Ok(self.openable.iter().any(|prefix| url.starts_with(prefix)))
    }

    async fn open_url(&self, url: &str) -> Result<(), PlatformError> {
        self.record(Call::OpenUrl(url.to_string()));
        if self.fail_open_url {
            return Err(failure("open_url"));
        }
        Ok(())
    }
}

impl Navigator for RecordingDevice {
    fn navigate(&self, route: Route) -> Result<(), PlatformError> {
        self.record(Call::Navigate(route.screen()));
        self.routes.lock().push(route);
        Ok(())
    }
}

impl Notifier for RecordingDevice {
    fn alert(&self, message: &str) {
        self.record(Call::Alert(message.to_string()));
    }
}

#[async_trait]
impl Telephony for RecordingDevice {
    fn immediate_call(&self, number: &str) -> Result<(), PlatformError> {
        self.record(Call::ImmediateCall(number.to_string()));
        Ok(())
    }

    async fn voicemail_number(&self) -> Result<String, PlatformError> {
        self.record(Call::VoicemailNumber);
        Ok(self.voicemail.clone())
    }

    async fn send_sms(&self, number: &str, body: &str) -> Result<(), PlatformError> {
        self.record(Call::SendSms(number.to_string(), body.to_string()));
        if self.fail_sms {
            return Err(failure("send_sms"));
        }
        Ok(())
    }
}

#[async_trait]
impl Torch for RecordingDevice {
    async fn request_permission(&self) -> Result<bool, PlatformError> {
        self.record(Call::TorchPermission);
        Ok(!self.deny_torch)
    }

    async fn status(&self) -> Result<bool, PlatformError> {
        self.record(Call::TorchStatus);
        Ok(*self.torch_on.lock())
    }

    async fn switch_state(&self, on: bool) -> Result<(), PlatformError> {
        self.record(Call::TorchSwitch(on));
        *self.torch_on.lock() = on;
        Ok(())
    }
}

impl Intents for RecordingDevice {
    fn open_camera(&self) -> Result<(), PlatformError> {
        self.record(Call::OpenCamera);
        Ok(())
    }

    fn open_maps(&self, query: &str) -> Result<(), PlatformError> {
        self.record(Call::OpenMaps(query.to_string()));
        Ok(())
    }

    fn open_maps_with_route(&self, address: &str, mode: &str) -> Result<(), PlatformError> {
        self.record(Call::OpenMapsWithRoute(address.to_string(), mode.to_string()));
        Ok(())
    }
}

#[async_trait]
impl ContactSource for RecordingDevice {
    async fn request_permission(&self) -> Result<bool, PlatformError> {
        self.record(Call::ContactsPermission);
        Ok(true)
    }

    async fn all_contacts(&self) -> Result<Vec<Contact>, PlatformError> {
        self.record(Call::AllContacts);
        self.contacts.clone().ok_or_else(|| failure("all_contacts"))
    }

    async fn select_contact_phone(&self) -> Result<Option<(Contact, PhoneNumber)>, PlatformError> {
        self.record(Call::SelectContactPhone);
        Ok(self.picked.clone())
    }
}

#[async_trait]
impl KeyValueStore for RecordingDevice {
    async fn get_item(&self, key: &str) -> Result<Option<String>, PlatformError> {
        self.record(Call::GetItem(key.to_string()));
        Ok(self.storage.lock().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.record(Call::SetItem(key.to_string(), value.to_string()));
        self.storage
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
