//! Configure screen operations.

use std::sync::Arc;

use futures::future::join_all;
use homebase_core::{ActionDescriptor, AppData, Catalog, ConfigureForm, Route};

use crate::cache::{AppDataStore, ContactBook};
use crate::error::{PlatformError, SubmitError};
use crate::install::InstallGate;
use crate::platform::Device;

/// Backs the configure screen: permissions, installs and the settings form.
pub struct Configurator {
    device: Device,
    gate: InstallGate,
    catalog: Arc<Catalog>,
    contacts: Arc<ContactBook>,
    app_data: Arc<AppDataStore>,
    launcher_package: String,
    settings_package: String,
}

impl Configurator {
    pub fn new(
        device: Device,
        gate: InstallGate,
        catalog: Arc<Catalog>,
        contacts: Arc<ContactBook>,
        app_data: Arc<AppDataStore>,
        launcher_package: impl Into<String>,
        settings_package: impl Into<String>,
    ) -> Self {
        Self {
            device,
            gate,
            catalog,
            contacts,
            app_data,
            launcher_package: launcher_package.into(),
            settings_package: settings_package.into(),
        }
    }

    /// Ask up front for the permissions the shortcuts will need.
    ///
    /// Refusals and failures are logged only; each shortcut asks again.
    pub async fn request_permissions(&self) {
        if let Err(e) = self.device.contacts.request_permission().await {
            tracing::warn!("Contacts permission request failed: {}", e);
        }
        if let Err(e) = self.device.torch.request_permission().await {
            tracing::warn!("Camera permission request failed: {}", e);
        }
    }

    /// Shortcuts whose package is not installed, for the "Install apps" list.
    ///
    /// If any install query fails the list is left empty.
    pub async fn missing_apps(&self) -> Vec<ActionDescriptor> {
        let candidates: Vec<(&ActionDescriptor, &str)> = self
            .catalog
            .all()
            .filter_map(|d| d.effective_dependency().map(|p| (d, p)))
            .collect();

        let answers = join_all(
            candidates
                .iter()
                .map(|(_, package)| self.device.packages.is_installed(package)),
        )
        .await;

        let mut missing = Vec::new();
        for ((descriptor, _), answer) in candidates.iter().zip(answers) {
            match answer {
                Ok(true) => {}
                Ok(false) => missing.push((*descriptor).clone()),
                Err(e) => {
                    tracing::warn!("Install check failed: {}", e);
                    return Vec::new();
                }
            }
        }
        missing
    }

    /// Open the store listing for `package`.
    pub async fn install_app(&self, package: &str) {
        self.gate.redirect_to_store(package).await;
    }

    /// Open the system settings app.
    pub async fn open_settings(&self) -> Result<(), PlatformError> {
        self.open_package(&self.settings_package).await
    }

    /// Open the stock launcher so the user can switch back.
    pub async fn open_default_launcher(&self) -> Result<(), PlatformError> {
        self.open_package(&self.launcher_package).await
    }

    async fn open_package(&self, package: &str) -> Result<(), PlatformError> {
        let result = self.device.packages.open_package(package).await;
        if let Err(e) = &result {
            tracing::warn!("Opening {} failed: {}", package, e);
            self.device.notifier.alert(&format!("Bad package: {}", package));
        }
        result
    }

    /// Validate, save, and return to the home screen.
    ///
    /// The emergency contact is given by name and saved as a record id.
    pub async fn submit(&self, form: &ConfigureForm) -> Result<AppData, SubmitError> {
        let form = form.validate()?;

        let emergency_contact = self
            .contacts
            .find_id_by_name(&form.emergency_contact)
            .await
            .map_err(|e| {
                tracing::warn!("Emergency contact lookup failed: {}", e);
                SubmitError::EmergencyContact(e)
            })?;

        let data = AppData {
            home_address: form.home_address,
            fav_music_genre: form.fav_music_genre,
            emergency_contact,
        };

        self.app_data.save(&data).await.map_err(|e| {
            tracing::warn!("Saving app configurations failed: {}", e);
            SubmitError::Save(e)
        })?;

        let home = Route::Home {
            shortcuts: self.catalog.home.clone(),
        };
        if let Err(e) = self.device.navigator.navigate(home) {
            tracing::warn!("Returning home after configure failed: {}", e);
        }
        Ok(data)
    }
}
