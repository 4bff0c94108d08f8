//! User settings captured by the configure screen.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Storage key the settings are persisted under.
pub const APP_DATA_KEY: &str = "@AppData";

/// Longest accepted music genre.
pub const MAX_GENRE_LEN: usize = 25;

/// Persisted user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Destination for "Map Home" and "Taxi Home".
    #[serde(default)]
    pub home_address: String,

    /// Search term for the music shortcut.
    #[serde(default)]
    pub fav_music_genre: String,

    /// Record id of the emergency contact.
    #[serde(default, rename = "emerContact1")]
    pub emergency_contact: String,
}

impl AppData {
    pub fn home_address(&self) -> Option<&str> {
        Some(self.home_address.as_str()).filter(|s| !s.is_empty())
    }

    pub fn fav_music_genre(&self) -> Option<&str> {
        Some(self.fav_music_genre.as_str()).filter(|s| !s.is_empty())
    }
}

/// Raw values typed into the configure form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureForm {
    pub home_address: String,
    /// Contact name ("Given" or "Given Family").
    pub emergency_contact: String,
    pub fav_music_genre: String,
}

impl ConfigureForm {
    /// Check field rules, then return the form with every field normalized.
    pub fn validate(&self) -> Result<ConfigureForm, FormError> {
        if self.home_address.trim().is_empty() {
            return Err(FormError::Required("home address"));
        }
        if self.emergency_contact.trim().is_empty() {
            return Err(FormError::Required("emergency contact"));
        }
        if self.fav_music_genre.chars().count() > MAX_GENRE_LEN {
            return Err(FormError::TooLong {
                field: "favorite music genre",
                max: MAX_GENRE_LEN,
            });
        }

        Ok(ConfigureForm {
            home_address: normalize_input(&self.home_address),
            emergency_contact: normalize_input(&self.emergency_contact),
            fav_music_genre: normalize_input(&self.fav_music_genre),
        })
    }
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_input(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  123   Main\tSt \n"), "123 Main St");
        assert_eq!(normalize_input("   "), "");
    }

    #[test]
    fn test_json_keys_match_storage_format() {
        let data = AppData {
            home_address: "1 Elm St".to_string(),
            fav_music_genre: "jazz".to_string(),
            emergency_contact: "42".to_string(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["homeAddress"], "1 Elm St");
        assert_eq!(json["favMusicGenre"], "jazz");
        assert_eq!(json["emerContact1"], "42");
    }

    #[test]
    fn test_optional_accessors() {
        let data = AppData::default();
        assert!(data.home_address().is_none());
        assert!(data.fav_music_genre().is_none());
    }

    #[test]
    fn test_validate_required_fields() {
        let form = ConfigureForm {
            home_address: " ".to_string(),
            emergency_contact: "Ann".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.validate(), Err(FormError::Required("home address"))));

        let form = ConfigureForm {
            home_address: "1 Elm St".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            form.validate(),
            Err(FormError::Required("emergency contact"))
        ));
    }

    #[test]
    fn test_validate_genre_length() {
        let form = ConfigureForm {
            home_address: "1 Elm St".to_string(),
            emergency_contact: "Ann".to_string(),
            fav_music_genre: "x".repeat(MAX_GENRE_LEN + 1),
        };
        assert!(matches!(form.validate(), Err(FormError::TooLong { .. })));
    }

    #[test]
    fn test_validate_normalizes() {
        let form = ConfigureForm {
            home_address: " 1  Elm St ".to_string(),
            emergency_contact: "Ann   Lee".to_string(),
            fav_music_genre: "slow  jazz".to_string(),
        };
        let clean = form.validate().unwrap();
        assert_eq!(clean.home_address, "1 Elm St");
        assert_eq!(clean.emergency_contact, "Ann Lee");
        assert_eq!(clean.fav_music_genre, "slow jazz");
    }
}
