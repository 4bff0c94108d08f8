//! Error types for shortcut dispatch.

use homebase_core::{ContactLookupError, FormError, Screen};
use thiserror::Error;

/// A platform collaborator call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The user (or the OS) refused a permission.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The capability does not exist on this device.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// The call was made and failed.
    #[error("{0}")]
    Failed(String),
}

/// A capability could not run to completion.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A positional parameter the capability needs was not supplied.
    #[error("Capability '{capability}' needs parameter {index}")]
    MissingParam {
        capability: &'static str,
        index: usize,
    },

    /// A `callback` shortcut named a capability that must be awaited.
    #[error("Capability '{0}' is asynchronous")]
    NotSynchronous(String),
}

/// Capability registration and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Capability '{0}' already registered")]
    AlreadyRegistered(String),

    #[error("Capability '{0}' is not registered")]
    NotRegistered(String),
}

/// Reading or writing persisted app data failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Broad class of a dispatch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The shortcut table itself is wrong.
    ConfigurationDefect,
    /// A collaborator call failed at runtime.
    PlatformCallFailure,
}

/// Why a tap did not perform its action.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The shortcut has no action.
    #[error("Invalid action: {name}")]
    InvalidAction { name: String },

    /// The shortcut names a screen the launcher does not have.
    #[error("Unknown screen: {screen}")]
    UnknownScreen { screen: String },

    /// The shortcut names a capability nobody registered.
    #[error("Bad callback: {name} ('{callback}' is not registered)")]
    UnknownCallback { name: String, callback: String },

    /// No shortcut has the requested key.
    #[error("Unknown shortcut: {key}")]
    UnknownShortcut { key: String },

    /// Asking whether the dependency is installed failed.
    #[error("Unable to check package: {package}")]
    InstallCheck {
        package: String,
        #[source]
        source: PlatformError,
    },

    /// No handler on the device accepts the URL.
    #[error("Unknown URL: {url}")]
    UnknownUrl { url: String },

    /// Probing or opening the URL failed.
    #[error("Bad URL: {url}")]
    BadUrl {
        url: String,
        #[source]
        source: PlatformError,
    },

    /// Opening the package failed.
    #[error("Bad package: {package}")]
    BadPackage {
        package: String,
        #[source]
        source: PlatformError,
    },

    /// The capability ran and failed.
    #[error("Bad callback: {name}")]
    BadCallback {
        name: String,
        #[source]
        source: CapabilityError,
    },

    /// The navigator refused the route.
    #[error("Unable to open {screen}")]
    Navigation {
        screen: Screen,
        #[source]
        source: PlatformError,
    },
}

impl DispatchError {
    pub fn class(&self) -> ErrorClass {
        match self {
            DispatchError::InvalidAction { .. }
            | DispatchError::UnknownScreen { .. }
            | DispatchError::UnknownCallback { .. }
            | DispatchError::UnknownShortcut { .. } => ErrorClass::ConfigurationDefect,
            DispatchError::InstallCheck { .. }
            | DispatchError::UnknownUrl { .. }
            | DispatchError::BadUrl { .. }
            | DispatchError::BadPackage { .. }
            | DispatchError::BadCallback { .. }
            | DispatchError::Navigation { .. } => ErrorClass::PlatformCallFailure,
        }
    }
}

/// Submitting the configure form failed. The text is shown under the form.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error("Invalid emergency contact, try again")]
    EmergencyContact(#[source] ContactLookupError),

    #[error("Submit failed, try again")]
    Save(#[source] StoreError),
}
