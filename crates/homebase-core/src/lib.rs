//! Core types for the Homebase launcher.
//!
//! This crate contains the data shared across all Homebase crates:
//! - Shortcut descriptors and action kinds
//! - Screens and navigation routes
//! - The built-in shortcut catalog
//! - Contacts and persisted app data
//! - Configuration, clock and battery helpers
//! - Error types

mod action;
mod app_data;
mod battery;
mod catalog;
mod clock;
mod config;
mod contact;
mod error;
mod screen;

pub use action::{ActionDescriptor, ActionKind, ShortcutConfig};
pub use app_data::{normalize_input, AppData, ConfigureForm, APP_DATA_KEY, MAX_GENRE_LEN};
pub use battery::{BatteryStatus, BatteryWatcher, ChargeState, BATTERY_LEVELS};
pub use catalog::{capability, Catalog};
pub use clock::format_date_time;
pub use config::{config_dir, config_path, LauncherConfig};
pub use contact::{digits_only, find_contact_id_by_name, sort_contacts, Contact, PhoneNumber};
pub use error::{ConfigError, ContactLookupError, FormError, UnknownScreen};
pub use screen::{Route, Screen, ScreenName};
