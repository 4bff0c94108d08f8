//! Dispatch Resolver
//!
//! Turns a tapped shortcut into exactly one platform action.
//!
//! ```text
//!   tap
//!    │
//!    ▼
//! ┌──────────────────────┐  not installed   ┌──────────────────┐
//! │ dependency installed? ├────────────────►│ open store, stop │
//! └──────────┬───────────┘                  └──────────────────┘
//!            │ yes / no dependency
//!            ▼
//!   match the action kind
//!    │
//!    ├─ Screen        → navigator
//!    ├─ Url           → can_open_url, open_url
//!    ├─ Package       → open_package
//!    ├─ Callback      → registry, run
//!    ├─ AsyncCallback → registry, run and await
//!    └─ none          → "Invalid action"
//! ```
//!
//! Every failure is logged and alerted here, then returned so callers can
//! inspect it. Nothing escapes as a panic.

use std::sync::Arc;

use homebase_core::{ActionDescriptor, ActionKind, AppData, Catalog, Route, Screen, ScreenName};

use crate::error::{CapabilityError, DispatchError};
use crate::install::{InstallGate, InstallStatus};
use crate::platform::Device;
use crate::registry::{Capability, CapabilityRegistry};

/// What a successful dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// Navigated to a screen.
    Navigated(Screen),
    /// Opened a URL.
    OpenedUrl(String),
    /// Opened a package.
    OpenedPackage(String),
    /// Ran a capability.
    InvokedCallback(String),
    /// The dependency was missing; its store listing was opened instead.
    RedirectedToStore(String),
}

/// Resolves shortcuts against the device and capability registry.
pub struct Dispatcher {
    device: Device,
    registry: Arc<CapabilityRegistry>,
    gate: InstallGate,
    catalog: Arc<Catalog>,
}

impl Dispatcher {
    pub fn new(
        device: Device,
        registry: Arc<CapabilityRegistry>,
        gate: InstallGate,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            device,
            registry,
            gate,
            catalog,
        }
    }

    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    /// Perform the action behind `descriptor`.
    ///
    /// Errors have already been shown to the user when this returns.
    pub async fn resolve_and_execute(
        &self,
        descriptor: &ActionDescriptor,
    ) -> Result<Dispatched, DispatchError> {
        tracing::debug!("Activating '{}' ({})", descriptor.name, descriptor.key);
        let result = self.dispatch(descriptor).await;
        if let Err(e) = &result {
            self.surface(&descriptor.key, e);
        }
        result
    }

    /// Log `error` and show it to the user.
    pub(crate) fn surface(&self, key: &str, error: &DispatchError) {
        match std::error::Error::source(error) {
            Some(source) => tracing::warn!("Shortcut '{}': {} ({})", key, error, source),
            None => tracing::warn!("Shortcut '{}': {}", key, error),
        }
        self.device.notifier.alert(&error.to_string());
    }

    async fn dispatch(&self, descriptor: &ActionDescriptor) -> Result<Dispatched, DispatchError> {
        if let Some(package) = descriptor.effective_dependency() {
            if self.gate.check(package).await? == InstallStatus::Redirected {
                return Ok(Dispatched::RedirectedToStore(package.to_string()));
            }
        }

        let params = descriptor.params();

        match &descriptor.action {
            Some(ActionKind::Screen { screen, .. }) => self.navigate(screen, descriptor),
            Some(ActionKind::Url(url)) => self.open_url(url).await,
            Some(ActionKind::Package(package)) => self.open_package(package).await,
            Some(ActionKind::Callback(name)) => self.run_callback(descriptor, name, params),
            Some(ActionKind::AsyncCallback(name)) => {
                self.run_async_callback(descriptor, name, params).await
            }
            None => Err(DispatchError::InvalidAction {
                name: descriptor.name.clone(),
            }),
        }
    }

    fn navigate(
        &self,
        name: &ScreenName,
        descriptor: &ActionDescriptor,
    ) -> Result<Dispatched, DispatchError> {
        let screen = name.resolve().map_err(|e| DispatchError::UnknownScreen { screen: e.0 })?;

        let route = match screen {
            Screen::Home => Route::Home {
                shortcuts: self.catalog.home.clone(),
            },
            Screen::Extras => Route::Extras {
                shortcuts: self.catalog.extras.clone(),
            },
            Screen::ContactList => Route::ContactList {
                descriptor: descriptor.clone(),
            },
            Screen::Configure => Route::Configure {
                defaults: AppData::default(),
            },
        };

        self.device
            .navigator
            .navigate(route)
            .map_err(|source| DispatchError::Navigation { screen, source })?;
        Ok(Dispatched::Navigated(screen))
    }

    async fn open_url(&self, url: &str) -> Result<Dispatched, DispatchError> {
        let bad_url = |source| DispatchError::BadUrl {
            url: url.to_string(),
            source,
        };

        if !self.device.linking.can_open_url(url).await.map_err(bad_url)? {
            return Err(DispatchError::UnknownUrl {
                url: url.to_string(),
            });
        }
        self.device.linking.open_url(url).await.map_err(bad_url)?;
        Ok(Dispatched::OpenedUrl(url.to_string()))
    }

    async fn open_package(&self, package: &str) -> Result<Dispatched, DispatchError> {
        self.device
            .packages
            .open_package(package)
            .await
            .map_err(|source| DispatchError::BadPackage {
                package: package.to_string(),
                source,
            })?;
        Ok(Dispatched::OpenedPackage(package.to_string()))
    }

    fn lookup(&self, descriptor: &ActionDescriptor, name: &str) -> Result<Capability, DispatchError> {
        self.registry
            .get(name)
            .map_err(|_| DispatchError::UnknownCallback {
                name: descriptor.name.clone(),
                callback: name.to_string(),
            })
    }

    fn run_callback(
        &self,
        descriptor: &ActionDescriptor,
        name: &str,
        params: &[String],
    ) -> Result<Dispatched, DispatchError> {
        let result = match self.lookup(descriptor, name)? {
            Capability::Sync(f) => f(params),
            Capability::Async(_) => Err(CapabilityError::NotSynchronous(name.to_string())),
        };
        result.map_err(|source| DispatchError::BadCallback {
            name: descriptor.name.clone(),
            source,
        })?;
        Ok(Dispatched::InvokedCallback(name.to_string()))
    }

    async fn run_async_callback(
        &self,
        descriptor: &ActionDescriptor,
        name: &str,
        params: &[String],
    ) -> Result<Dispatched, DispatchError> {
        let capability = self.lookup(descriptor, name)?;
        capability
            .invoke(params)
            .await
            .map_err(|source| DispatchError::BadCallback {
                name: descriptor.name.clone(),
                source,
            })?;
        Ok(Dispatched::InvokedCallback(name.to_string()))
    }
}
