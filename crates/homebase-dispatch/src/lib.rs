//! Shortcut dispatch for the Homebase launcher.
//!
//! This crate turns a tapped shortcut into platform effects:
//! - Platform collaborator traits and the `Device` bundle
//! - The install gate and app store redirect
//! - The named capability registry and built-in capabilities
//! - The dispatch resolver
//! - Contact and app data caches
//! - Configure screen operations and the `Launcher` facade

pub mod cache;
pub mod capabilities;
pub mod configure;
pub mod error;
pub mod install;
pub mod launcher;
pub mod platform;
pub mod registry;
pub mod resolver;

#[cfg(test)]
mod testing;

pub use cache::{AppDataStore, ContactBook};
pub use capabilities::{register_builtin_capabilities, CapabilityContext};
pub use configure::Configurator;
pub use error::{
    CapabilityError, DispatchError, ErrorClass, PlatformError, RegistryError, StoreError,
    SubmitError,
};
pub use install::{InstallGate, InstallStatus};
pub use launcher::Launcher;
pub use platform::{
    ContactSource, Device, Intents, KeyValueStore, Linking, Navigator, Notifier, PackageManager,
    Telephony, Torch,
};
pub use registry::{AsyncCapability, Capability, CapabilityRegistry, SyncCapability};
pub use resolver::{Dispatched, Dispatcher};

// Re-export homebase_core types for convenience
pub use homebase_core::{ActionDescriptor, ActionKind, AppData, Catalog, Route, Screen};
