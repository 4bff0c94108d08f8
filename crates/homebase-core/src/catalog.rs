//! The built-in shortcut tables.
//!
//! - `home`: the main grid
//! - `extras`: the "More Apps" grid
//! - `background`: packages the configure screen offers to open or install

use crate::action::{ActionDescriptor, ActionKind};
use crate::config::LauncherConfig;
use crate::screen::{Screen, ScreenName};

/// Names of the built-in capabilities referenced by the tables.
pub mod capability {
    pub const CALL_PHONE: &str = "call_phone";
    pub const OPEN_CAMERA: &str = "open_camera";
    pub const MAP_HOME: &str = "map_home";
    pub const UBER_HOME: &str = "uber_home";
    pub const OPEN_SPOTIFY: &str = "open_spotify";
    pub const TOGGLE_TORCH: &str = "toggle_torch";
    pub const EMERGENCY_CALLS: &str = "emergency_calls";
    pub const PICK_AND_CALL: &str = "pick_and_call";
    pub const CALL_VOICEMAIL: &str = "call_voicemail";
}

/// All shortcut tables. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub home: Vec<ActionDescriptor>,
    pub extras: Vec<ActionDescriptor>,
    pub background: Vec<ActionDescriptor>,
}

impl Catalog {
    /// The stock tables with no configuration applied.
    pub fn builtin() -> Self {
        Self::from_config(&LauncherConfig::default())
    }

    /// The stock tables, with the configured extras appended.
    pub fn from_config(config: &LauncherConfig) -> Self {
        let mut extras = extra_shortcuts();
        extras.extend(config.extras.iter().cloned().map(ActionDescriptor::from));

        Self {
            home: home_shortcuts(),
            extras,
            background: background_shortcuts(config),
        }
    }

    /// Iterate every shortcut across all tables.
    pub fn all(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.home
            .iter()
            .chain(self.extras.iter())
            .chain(self.background.iter())
    }

    /// Find a grid shortcut by key. Home wins over Extras over background.
    pub fn find(&self, key: &str) -> Option<&ActionDescriptor> {
        self.all().find(|d| d.key == key)
    }
}

fn screen(screen: Screen) -> ActionKind {
    ActionKind::Screen {
        screen: ScreenName::from(screen),
        then: None,
    }
}

fn contact_list(then: ActionKind) -> ActionKind {
    ActionKind::Screen {
        screen: ScreenName::from(Screen::ContactList),
        then: Some(Box::new(then)),
    }
}

fn url(url: &str) -> ActionKind {
    ActionKind::Url(url.to_string())
}

fn package(package: &str) -> ActionKind {
    ActionKind::Package(package.to_string())
}

fn callback(name: &str) -> ActionKind {
    ActionKind::Callback(name.to_string())
}

fn async_callback(name: &str) -> ActionKind {
    ActionKind::AsyncCallback(name.to_string())
}

fn home_shortcuts() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new("dial", "Dialpad", "dialpad").with_action(url("tel:")),
        ActionDescriptor::new("phone", "Phone Calls", "phone")
            .with_callback_params(Vec::new())
            .with_action(contact_list(callback(capability::CALL_PHONE))),
        ActionDescriptor::new("texts", "Text Msgs", "chat")
            .with_action(package("com.google.android.apps.messaging")),
        ActionDescriptor::new("missed", "Missed Calls", "phone-missed")
            .with_dependency("com.goodwy.dialer")
            .with_action(url("content://call_log/calls")),
        ActionDescriptor::new("weather", "Weather", "wb-sunny")
            .with_action(url("dynact://velour/weather/ProxyActivity")),
        ActionDescriptor::new("camera", "Camera", "photo-camera")
            .with_action(callback(capability::OPEN_CAMERA)),
        ActionDescriptor::new("photos", "Photos", "photo")
            .with_action(package("com.google.android.apps.photos")),
        ActionDescriptor::new("maps", "Map Home", "map")
            .with_dependency("com.google.android.apps.maps")
            .with_action(async_callback(capability::MAP_HOME)),
        ActionDescriptor::new("reminder", "Reminders", "alarm")
            .with_action(package("in.smsoft.justremind")),
        ActionDescriptor::new("flashlight", "Flashlight", "lightbulb")
            .with_action(async_callback(capability::TOGGLE_TORCH)),
        ActionDescriptor::new("emergency", "Emergency", "new-releases")
            .with_color("#d00")
            .with_action(async_callback(capability::EMERGENCY_CALLS)),
        ActionDescriptor::new("more", "More Apps", "more-horiz").with_action(screen(Screen::Extras)),
    ]
}

fn extra_shortcuts() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new("whatsapp", "WhatsApp", "add-ic-call")
            .with_dependency("com.whatsapp")
            .with_action(contact_list(url("whatsapp://send?phone="))),
        ActionDescriptor::new("uber", "Taxi Home", "local-taxi")
            .with_dependency("com.ubercab")
            .with_action(async_callback(capability::UBER_HOME)),
        ActionDescriptor::new("music", "Music", "headset")
            .with_dependency("com.spotify.music")
            .with_action(async_callback(capability::OPEN_SPOTIFY)),
        ActionDescriptor::new("calendar", "Calendar", "calendar-today")
            .with_action(package("com.google.android.calendar")),
        ActionDescriptor::new("email", "Email", "email").with_action(package("com.google.android.gm")),
        ActionDescriptor::new("calculator", "Calculator", "calculate")
            .with_action(package("com.google.android.calculator")),
        ActionDescriptor::new("health", "Health", "directions-run")
            .with_action(package("com.google.android.apps.fitness")),
        ActionDescriptor::new("solitaire", "Solitaire", "auto-awesome-motion")
            .with_action(package("com.potatojam.classic.solitaire.klondike")),
        ActionDescriptor::new("fortune", "Wheel of Fortune", "filter-tilt-shift")
            .with_action(package("com.scopely.wheeloffortune")),
        ActionDescriptor::new("news", "News", "radio").with_action(package("org.npr.one")),
        ActionDescriptor::new("settings", "Settings", "settings")
            .with_action(screen(Screen::Configure)),
        ActionDescriptor::new("book", "Books", "menu-book")
            .with_action(package("com.google.android.apps.books")),
    ]
}

fn background_shortcuts(config: &LauncherConfig) -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new("launcher", "Default Launcher", "apps")
            .with_action(package(&config.launcher_package)),
        ActionDescriptor::new("system-settings", "Settings", "settings")
            .with_action(package(&config.settings_package)),
        ActionDescriptor::new("locator", "Find My Device", "search")
            .with_action(package("com.google.android.apps.adm")),
    ]
}
