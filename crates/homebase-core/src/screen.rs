//! Screens and navigation routes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::action::ActionDescriptor;
use crate::app_data::AppData;
use crate::error::UnknownScreen;

/// Screen identifier as written in a shortcut.
///
/// Kept as a string so that a typo in configuration surfaces when the
/// shortcut is tapped instead of failing the whole config load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenName(pub String);

impl From<&str> for ScreenName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Screen> for ScreenName {
    fn from(screen: Screen) -> Self {
        Self(screen.as_str().to_string())
    }
}

impl AsRef<str> for ScreenName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ScreenName {
    /// Resolve to a known screen.
    pub fn resolve(&self) -> Result<Screen, UnknownScreen> {
        self.0.parse()
    }
}

/// The launcher's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Home,
    Extras,
    ContactList,
    Configure,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Extras => "Extras",
            Screen::ContactList => "ContactList",
            Screen::Configure => "Configure",
        }
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Home" => Ok(Screen::Home),
            "Extras" => Ok(Screen::Extras),
            "ContactList" => Ok(Screen::ContactList),
            "Configure" => Ok(Screen::Configure),
            other => Err(UnknownScreen(other.to_string())),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigation request: the target screen plus its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen")]
pub enum Route {
    /// Main grid of shortcuts.
    Home { shortcuts: Vec<ActionDescriptor> },

    /// Secondary grid of shortcuts.
    Extras { shortcuts: Vec<ActionDescriptor> },

    /// Contact picker that runs `descriptor` against the chosen contact.
    ContactList { descriptor: ActionDescriptor },

    /// Settings form, prefilled with `defaults`.
    Configure { defaults: AppData },
}

impl Route {
    pub fn screen(&self) -> Screen {
        match self {
            Route::Home { .. } => Screen::Home,
            Route::Extras { .. } => Screen::Extras,
            Route::ContactList { .. } => Screen::ContactList,
            Route::Configure { .. } => Screen::Configure,
        }
    }
}
