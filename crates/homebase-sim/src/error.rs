//! Error types for the simulator host.

use std::path::PathBuf;
use thiserror::Error;

use homebase_core::ConfigError;
use homebase_dispatch::{RegistryError, SubmitError};

/// Everything that can end a simulator run early.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Device profile error in {path:?}: {message}")]
    Profile { path: PathBuf, message: String },

    #[error("Failed to register capabilities: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("{0}")]
    Usage(String),
}
