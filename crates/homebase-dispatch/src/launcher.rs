//! Launcher
//!
//! Wires the catalog, device, caches, capability registry and dispatcher
//! together. This is what a UI host talks to.

use parking_lot::Mutex;
use std::sync::Arc;

use homebase_core::{
    format_date_time, ActionDescriptor, BatteryStatus, BatteryWatcher, Catalog, LauncherConfig,
    Route,
};

use crate::cache::{AppDataStore, ContactBook};
use crate::capabilities::{register_builtin_capabilities, CapabilityContext};
use crate::configure::Configurator;
use crate::error::{DispatchError, RegistryError};
use crate::install::InstallGate;
use crate::platform::Device;
use crate::registry::CapabilityRegistry;
use crate::resolver::{Dispatched, Dispatcher};

/// The launcher behind the UI.
pub struct Launcher {
    catalog: Arc<Catalog>,
    device: Device,
    dispatcher: Dispatcher,
    contacts: Arc<ContactBook>,
    app_data: Arc<AppDataStore>,
    configurator: Configurator,
    battery: Mutex<BatteryWatcher>,
}

impl Launcher {
    /// Build a launcher with the built-in capabilities registered.
    pub fn new(config: &LauncherConfig, device: Device) -> Result<Self, RegistryError> {
        let catalog = Arc::new(Catalog::from_config(config));
        let contacts = Arc::new(ContactBook::new(
            device.contacts.clone(),
            device.notifier.clone(),
        ));
        let app_data = Arc::new(AppDataStore::new(
            device.storage.clone(),
            device.notifier.clone(),
        ));
        let gate = InstallGate::new(
            device.packages.clone(),
            device.linking.clone(),
            device.notifier.clone(),
            config.store_url_prefix.clone(),
        );

        let registry = Arc::new(CapabilityRegistry::new());
        register_builtin_capabilities(
            &registry,
            CapabilityContext {
                device: device.clone(),
                app_data: app_data.clone(),
                contacts: contacts.clone(),
                emergency_call_wait: config.emergency_call_wait(),
            },
        )?;

        let dispatcher = Dispatcher::new(device.clone(), registry, gate.clone(), catalog.clone());
        let configurator = Configurator::new(
            device.clone(),
            gate,
            catalog.clone(),
            contacts.clone(),
            app_data.clone(),
            config.launcher_package.clone(),
            config.settings_package.clone(),
        );

        tracing::info!(
            "Launcher ready: {} home, {} extra shortcuts",
            catalog.home.len(),
            catalog.extras.len()
        );

        Ok(Self {
            catalog,
            device,
            dispatcher,
            contacts,
            app_data,
            configurator,
            battery: Mutex::new(BatteryWatcher::new()),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The capability registry, for hosts that add their own capabilities.
    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        self.dispatcher.registry()
    }

    pub fn configurator(&self) -> &Configurator {
        &self.configurator
    }

    pub fn app_data(&self) -> &Arc<AppDataStore> {
        &self.app_data
    }

    /// Run a tapped shortcut.
    pub async fn activate(&self, descriptor: &ActionDescriptor) -> Result<Dispatched, DispatchError> {
        self.dispatcher.resolve_and_execute(descriptor).await
    }

    /// Run the catalog shortcut with `key`.
    pub async fn activate_key(&self, key: &str) -> Result<Dispatched, DispatchError> {
        match self.catalog.find(key) {
            Some(descriptor) => self.activate(descriptor).await,
            None => {
                let err = DispatchError::UnknownShortcut {
                    key: key.to_string(),
                };
                self.dispatcher.surface(key, &err);
                Err(err)
            }
        }
    }

    /// One shortcut per listable contact, each targeting that contact.
    pub async fn contact_choices(&self, descriptor: &ActionDescriptor) -> Vec<ActionDescriptor> {
        self.contacts
            .listable()
            .await
            .iter()
            .map(|contact| descriptor.for_contact(contact))
            .collect()
    }

    /// Called when the home screen appears. Sends first-time users to the
    /// configure screen; returns whether it did.
    pub async fn on_home_shown(&self) -> bool {
        if self.app_data.load().await.is_some() {
            return false;
        }
        tracing::info!("No app configurations yet, opening configure screen");
        let route = Route::Configure {
            defaults: Default::default(),
        };
        if let Err(e) = self.device.navigator.navigate(route) {
            tracing::warn!("Opening configure screen failed: {}", e);
            return false;
        }
        true
    }

    /// Feed a battery state change; alerts when a low-battery mark is crossed.
    pub fn on_battery_state(&self, status: BatteryStatus) {
        let warning = self.battery.lock().on_state_change(status);
        if let Some(message) = warning {
            self.device.alert_and_warn(&message);
        }
    }

    /// Current clock header text.
    pub fn clock_text(&self) -> String {
        format_date_time(chrono::Local::now().naive_local())
    }
}
