//! Shortcut descriptors and the action each one performs.

use serde::{Deserialize, Serialize};

use crate::contact::{digits_only, Contact};
use crate::screen::ScreenName;

/// The single action a shortcut performs when tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Navigate to an in-app screen.
    ///
    /// `then` is the action the screen performs once it has supplied a
    /// contact (the contact list uses it to dial or message the pick).
    Screen {
        screen: ScreenName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        then: Option<Box<ActionKind>>,
    },

    /// Open a URL with whatever handles its scheme.
    Url(String),

    /// Open an installed package.
    Package(String),

    /// Invoke a registered synchronous capability.
    Callback(String),

    /// Invoke a registered capability and wait for it to finish.
    AsyncCallback(String),
}

impl ActionKind {
    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Screen { .. } => "screen",
            ActionKind::Url(_) => "url",
            ActionKind::Package(_) => "package",
            ActionKind::Callback(_) => "callback",
            ActionKind::AsyncCallback(_) => "async_callback",
        }
    }

    fn append_param(&mut self, param: &str) {
        match self {
            ActionKind::Url(url) => url.push_str(param),
            ActionKind::Screen {
                then: Some(then), ..
            } => then.append_param(param),
            _ => {}
        }
    }
}

/// One selectable shortcut.
///
/// Descriptors live in the static catalog and are never mutated in place.
/// Per-tap enrichment goes through [`ActionDescriptor::with_appended_param`]
/// or [`ActionDescriptor::for_contact`], which return copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Unique, stable identifier.
    pub key: String,

    /// Display label.
    pub name: String,

    /// Icon identifier.
    pub icon: String,

    /// Accent color (hex string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Package that must be installed before the action may run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_package: Option<String>,

    /// Positional arguments for callback actions.
    ///
    /// `None` and an empty list differ: contact enrichment only appends to a
    /// list that already exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_params: Option<Vec<String>>,

    /// What tapping the shortcut does. `None` is a configuration defect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionKind>,
}

impl ActionDescriptor {
    /// Create a descriptor with no action set.
    pub fn new(key: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: icon.into(),
            color: None,
            dependency_package: None,
            callback_params: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: ActionKind) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_dependency(mut self, package: impl Into<String>) -> Self {
        self.dependency_package = Some(package.into());
        self
    }

    pub fn with_callback_params(mut self, params: Vec<String>) -> Self {
        self.callback_params = Some(params);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The package the install gate must check, if any.
    ///
    /// A package action always depends on its own package, overriding any
    /// separately configured dependency.
    pub fn effective_dependency(&self) -> Option<&str> {
        match &self.action {
            Some(ActionKind::Package(package)) => Some(package),
            _ => self.dependency_package.as_deref(),
        }
    }

    /// Callback parameters, defaulting to an empty list.
    pub fn params(&self) -> &[String] {
        self.callback_params.as_deref().unwrap_or(&[])
    }

    /// Copy of this descriptor with `param` appended to its URL (if any) and
    /// pushed onto its callback parameters (if present).
    pub fn with_appended_param(&self, param: &str) -> Self {
        let mut copy = self.clone();
        if let Some(action) = copy.action.as_mut() {
            action.append_param(param);
        }
        if let Some(params) = copy.callback_params.as_mut() {
            params.push(param.to_string());
        }
        copy
    }

    /// Copy of this descriptor targeted at one contact.
    ///
    /// The screen step is dropped in favor of its follow-up action, and the
    /// contact's first number (digits only) is appended as a parameter.
    pub fn for_contact(&self, contact: &Contact) -> Self {
        let number = contact
            .primary_number()
            .map(digits_only)
            .unwrap_or_default();

        let mut copy = self.with_appended_param(&number);
        copy.action = match copy.action.take() {
            Some(ActionKind::Screen { then, .. }) => then.map(|then| *then),
            other => other,
        };
        copy.name = contact.display_name();
        copy.key = format!("{}-{}-{}", self.key, contact.given_name, contact.family_name);
        copy.icon = "person".to_string();
        copy
    }
}

/// Flat, serde-friendly shortcut form used by config files.
///
/// Several selectors may be populated at once; conversion keeps exactly one
/// with the precedence `screen > url > package > callback > async_callback`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    pub key: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub dependency_package: Option<String>,
    #[serde(default)]
    pub callback_params: Option<Vec<String>>,

    #[serde(default)]
    pub screen: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub callback: Option<String>,
    #[serde(default)]
    pub async_callback: Option<String>,
}

fn default_icon() -> String {
    "apps".to_string()
}

impl ShortcutConfig {
    /// Selectors in precedence order, skipping unset ones.
    fn selectors(&self) -> Vec<ActionKind> {
        let mut kinds = Vec::new();
        if let Some(screen) = &self.screen {
            kinds.push(ActionKind::Screen {
                screen: ScreenName::from(screen.as_str()),
                then: None,
            });
        }
        if let Some(url) = &self.url {
            kinds.push(ActionKind::Url(url.clone()));
        }
        if let Some(package) = &self.package {
            kinds.push(ActionKind::Package(package.clone()));
        }
        if let Some(callback) = &self.callback {
            kinds.push(ActionKind::Callback(callback.clone()));
        }
        if let Some(callback) = &self.async_callback {
            kinds.push(ActionKind::AsyncCallback(callback.clone()));
        }
        kinds
    }
}

impl From<ShortcutConfig> for ActionDescriptor {
    fn from(config: ShortcutConfig) -> Self {
        let selectors = config.selectors();
        let used = match selectors.first() {
            Some(ActionKind::Screen { .. }) => 2,
            _ => 1,
        };
        if selectors.len() > used {
            tracing::warn!(
                "Shortcut '{}' sets {} actions; using {}",
                config.key,
                selectors.len(),
                selectors[0].label()
            );
        }

        let mut selectors = selectors.into_iter();
        let winner = selectors.next();
        let runner_up = selectors.next();

        let action = match winner {
            Some(ActionKind::Screen { screen, .. }) => Some(ActionKind::Screen {
                screen,
                then: runner_up.map(Box::new),
            }),
            other => other,
        };

        // A package always doubles as the dependency, whichever action won.
        let dependency_package = config.package.clone().or(config.dependency_package);

        Self {
            key: config.key,
            name: config.name,
            icon: config.icon,
            color: config.color,
            dependency_package,
            callback_params: config.callback_params,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::PhoneNumber;

    fn contact() -> Contact {
        Contact {
            record_id: "7".to_string(),
            given_name: "Ada".to_string(),
            family_name: "Lovelace".to_string(),
            is_starred: false,
            phone_numbers: vec![PhoneNumber::new("mobile", "(555) 123-4567")],
        }
    }

    #[test]
    fn test_package_overrides_dependency() {
        let descriptor = ActionDescriptor::new("texts", "Text Msgs", "chat")
            .with_dependency("com.other")
            .with_action(ActionKind::Package("com.messaging".to_string()));
        assert_eq!(descriptor.effective_dependency(), Some("com.messaging"));
    }

    #[test]
    fn test_dependency_without_package() {
        let descriptor = ActionDescriptor::new("maps", "Map Home", "map")
            .with_dependency("com.maps")
            .with_action(ActionKind::AsyncCallback("map_home".to_string()));
        assert_eq!(descriptor.effective_dependency(), Some("com.maps"));
    }

    #[test]
    fn test_params_default_empty() {
        let descriptor = ActionDescriptor::new("camera", "Camera", "photo-camera");
        assert!(descriptor.params().is_empty());
    }

    #[test]
    fn test_appended_param_does_not_touch_original() {
        let original = ActionDescriptor::new("dial", "Dialpad", "dialpad")
            .with_action(ActionKind::Url("tel:".to_string()))
            .with_callback_params(vec!["a".to_string()]);

        let copy = original.with_appended_param("5551234567");

        assert_eq!(copy.action, Some(ActionKind::Url("tel:5551234567".to_string())));
        assert_eq!(copy.params(), ["a", "5551234567"]);
        assert_eq!(original.action, Some(ActionKind::Url("tel:".to_string())));
        assert_eq!(original.params(), ["a"]);
    }

    #[test]
    fn test_appended_param_skips_missing_params() {
        let descriptor = ActionDescriptor::new("dial", "Dialpad", "dialpad")
            .with_action(ActionKind::Url("tel:".to_string()));
        assert!(descriptor.with_appended_param("1").callback_params.is_none());
    }

    #[test]
    fn test_for_contact_unwraps_screen() {
        let phone = ActionDescriptor::new("phone", "Phone Calls", "phone")
            .with_callback_params(Vec::new())
            .with_action(ActionKind::Screen {
                screen: ScreenName::from("ContactList"),
                then: Some(Box::new(ActionKind::Callback("call_phone".to_string()))),
            });

        let targeted = phone.for_contact(&contact());

        assert_eq!(targeted.action, Some(ActionKind::Callback("call_phone".to_string())));
        assert_eq!(targeted.params(), ["5551234567"]);
        assert_eq!(targeted.name, "Ada Lovelace");
        assert_eq!(targeted.key, "phone-Ada-Lovelace");
        assert_eq!(targeted.icon, "person");
        assert!(matches!(phone.action, Some(ActionKind::Screen { .. })));
    }

    #[test]
    fn test_for_contact_appends_to_url() {
        let whatsapp = ActionDescriptor::new("whatsapp", "WhatsApp", "add-ic-call")
            .with_dependency("com.whatsapp")
            .with_action(ActionKind::Screen {
                screen: ScreenName::from("ContactList"),
                then: Some(Box::new(ActionKind::Url("whatsapp://send?phone=".to_string()))),
            });

        let targeted = whatsapp.for_contact(&contact());

        assert_eq!(
            targeted.action,
            Some(ActionKind::Url("whatsapp://send?phone=5551234567".to_string()))
        );
        assert!(targeted.callback_params.is_none());
        assert_eq!(targeted.effective_dependency(), Some("com.whatsapp"));
    }

    #[test]
    fn test_shortcut_precedence() {
        let config = ShortcutConfig {
            key: "multi".to_string(),
            name: "Multi".to_string(),
            url: Some("https://example.com".to_string()),
            package: Some("com.example".to_string()),
            callback: Some("call_phone".to_string()),
            ..Default::default()
        };

        let descriptor = ActionDescriptor::from(config);

        assert_eq!(
            descriptor.action,
            Some(ActionKind::Url("https://example.com".to_string()))
        );
        assert_eq!(descriptor.dependency_package.as_deref(), Some("com.example"));
        assert_eq!(descriptor.effective_dependency(), Some("com.example"));
    }

    #[test]
    fn test_shortcut_screen_keeps_follow_up() {
        let config = ShortcutConfig {
            key: "phone".to_string(),
            name: "Phone Calls".to_string(),
            screen: Some("ContactList".to_string()),
            callback: Some("call_phone".to_string()),
            async_callback: Some("ignored".to_string()),
            ..Default::default()
        };

        let descriptor = ActionDescriptor::from(config);

        assert_eq!(
            descriptor.action,
            Some(ActionKind::Screen {
                screen: ScreenName::from("ContactList"),
                then: Some(Box::new(ActionKind::Callback("call_phone".to_string()))),
            })
        );
    }

    #[test]
    fn test_shortcut_without_selector() {
        let config = ShortcutConfig {
            key: "empty".to_string(),
            name: "Empty".to_string(),
            ..Default::default()
        };
        assert!(ActionDescriptor::from(config).action.is_none());
    }

    #[test]
    fn test_shortcut_from_toml() {
        let config: ShortcutConfig = toml::from_str(
            r#"
            key = "news"
            name = "News"
            icon = "radio"
            package = "org.npr.one"
            "#,
        )
        .unwrap();

        let descriptor = ActionDescriptor::from(config);
        assert_eq!(descriptor.action, Some(ActionKind::Package("org.npr.one".to_string())));
        assert_eq!(descriptor.icon, "radio");
    }
}
