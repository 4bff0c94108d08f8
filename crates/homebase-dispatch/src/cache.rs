//! Process-lifetime caches for data the platform is slow to produce.
//!
//! - `ContactBook` - the address book, fetched and sorted once
//! - `AppDataStore` - persisted settings, read once and refreshed on save
//!
//! Neither cache is invalidated behind the caller's back; both are owned by
//! the launcher and handed to whoever needs them.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::OnceCell;

use homebase_core::{find_contact_id_by_name, sort_contacts, AppData, Contact, ContactLookupError, APP_DATA_KEY};

use crate::error::{PlatformError, StoreError};
use crate::platform::{ContactSource, KeyValueStore, Notifier};

// =============================================================================
// Contact Book
// =============================================================================

/// Cached, sorted address book.
pub struct ContactBook {
    source: Arc<dyn ContactSource>,
    notifier: Arc<dyn Notifier>,
    contacts: OnceCell<Vec<Contact>>,
}

impl ContactBook {
    pub fn new(source: Arc<dyn ContactSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            source,
            notifier,
            contacts: OnceCell::new(),
        }
    }

    /// Every contact, starred first.
    ///
    /// The first call fetches; a failed fetch is reported once and caches an
    /// empty book.
    pub async fn all(&self) -> &[Contact] {
        self.contacts.get_or_init(|| self.load()).await
    }

    /// Contacts that belong in the contact list.
    pub async fn listable(&self) -> Vec<Contact> {
        self.all()
            .await
            .iter()
            .filter(|c| c.is_listable())
            .cloned()
            .collect()
    }

    /// The emergency contacts named in `data`.
    pub async fn emergency_contacts(&self, data: &AppData) -> Vec<Contact> {
        if data.emergency_contact.is_empty() {
            return Vec::new();
        }
        self.all()
            .await
            .iter()
            .filter(|c| c.record_id == data.emergency_contact)
            .cloned()
            .collect()
    }

    /// Record id of the contact called `name`.
    pub async fn find_id_by_name(&self, name: &str) -> Result<String, ContactLookupError> {
        find_contact_id_by_name(self.all().await, name)
    }

    async fn load(&self) -> Vec<Contact> {
        match self.fetch().await {
            Ok(mut contacts) => {
                sort_contacts(&mut contacts);
                tracing::info!("{} contacts retrieved.", contacts.len());
                contacts
            }
            Err(e) => {
                tracing::warn!("Unable to retrieve contacts: {}", e);
                self.notifier.alert("Unable to retrieve contacts");
                Vec::new()
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Contact>, PlatformError> {
        if !self.source.request_permission().await? {
            return Err(PlatformError::PermissionDenied("contacts".to_string()));
        }
        self.source.all_contacts().await
    }
}

// =============================================================================
// App Data Store
// =============================================================================

/// Persisted settings with a read-through cache.
pub struct AppDataStore {
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    cached: RwLock<Option<AppData>>,
}

impl AppDataStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            storage,
            notifier,
            cached: RwLock::new(None),
        }
    }

    /// The saved settings, or `None` if the user has not configured the app.
    ///
    /// A missing entry is not cached, so a later save is picked up. A read or
    /// parse failure is reported and treated as missing.
    pub async fn load(&self) -> Option<AppData> {
        if let Some(data) = self.cached.read().clone() {
            return Some(data);
        }

        let json = match self.storage.get_item(APP_DATA_KEY).await {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                self.report_load_failure(&e);
                return None;
            }
        };

        match serde_json::from_str::<AppData>(&json) {
            Ok(data) => {
                tracing::info!("Retrieved app configurations.");
                *self.cached.write() = Some(data.clone());
                Some(data)
            }
            Err(e) => {
                self.report_load_failure(&e);
                None
            }
        }
    }

    /// Persist `data` and make it the cached value.
    pub async fn save(&self, data: &AppData) -> Result<(), StoreError> {
        let json = serde_json::to_string(data)?;
        self.storage.set_item(APP_DATA_KEY, &json).await?;
        *self.cached.write() = Some(data.clone());
        tracing::info!("Saved app configurations.");
        Ok(())
    }

    fn report_load_failure(&self, error: &dyn std::fmt::Display) {
        tracing::warn!("Unable to retrieve app configurations: {}", error);
        self.notifier.alert("Unable to retrieve app configurations");
    }
}
