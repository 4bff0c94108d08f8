//! Error types for the Homebase launcher.

use std::path::PathBuf;
use thiserror::Error;

/// A screen name that matches none of the launcher's screens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown screen: {0}")]
pub struct UnknownScreen(pub String);

/// Configure form rejected before anything was saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was left blank.
    #[error("The {0} is required.")]
    Required(&'static str),

    /// A field exceeded its maximum length.
    #[error("The {field} must be at most {max} characters.")]
    TooLong { field: &'static str, max: usize },
}

/// Looking a contact up by name failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactLookupError {
    #[error("Invalid first name")]
    MissingGivenName,

    #[error("Last name needed for filtering")]
    FamilyNameNeeded,

    #[error("{count} contacts with this name were found: {name}")]
    Ambiguous { name: String, count: usize },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("Failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Parse error.
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}
