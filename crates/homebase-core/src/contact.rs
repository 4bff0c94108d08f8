//! Contact records and the helpers the contact list relies on.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::ContactLookupError;

/// A single phone number on a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub label: String,
    pub number: String,
}

impl PhoneNumber {
    pub fn new(label: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            number: number.into(),
        }
    }
}

/// An address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub record_id: String,
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
}

impl Contact {
    /// "Given Family", as shown in the contact list.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// The first phone number, if it is non-empty.
    pub fn primary_number(&self) -> Option<&str> {
        self.phone_numbers
            .first()
            .map(|p| p.number.as_str())
            .filter(|n| !n.is_empty())
    }

    /// Whether the contact belongs in the contact list.
    ///
    /// Needs a number, and service entries whose name starts with `#` or `*`
    /// are hidden.
    pub fn is_listable(&self) -> bool {
        self.primary_number().is_some()
            && !matches!(self.given_name.chars().next(), Some('#') | Some('*'))
    }
}

/// Strip everything but ASCII digits from a phone number.
pub fn digits_only(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Starred contacts first, then alphabetical by given name.
pub fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| match (a.is_starred, b.is_starred) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.given_name.cmp(&b.given_name),
    });
}

/// Find the record id of the contact named `name` ("Given" or "Given Family").
///
/// A unique given-name match wins. Otherwise the family name is required and
/// narrows the given-name matches.
pub fn find_contact_id_by_name(
    contacts: &[Contact],
    name: &str,
) -> Result<String, ContactLookupError> {
    let mut parts = name.split(' ');
    let given = parts.next().unwrap_or_default();
    if given.is_empty() {
        return Err(ContactLookupError::MissingGivenName);
    }

    let by_given: Vec<&Contact> = contacts.iter().filter(|c| c.given_name == given).collect();
    if let [only] = by_given.as_slice() {
        return Ok(only.record_id.clone());
    }

    let family = parts.next().ok_or(ContactLookupError::FamilyNameNeeded)?;
    let by_family: Vec<&Contact> = by_given
        .into_iter()
        .filter(|c| c.family_name == family)
        .collect();
    match by_family.as_slice() {
        [only] => Ok(only.record_id.clone()),
        matches => Err(ContactLookupError::Ambiguous {
            name: name.to_string(),
            count: matches.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, given: &str, family: &str, starred: bool, number: &str) -> Contact {
        Contact {
            record_id: id.to_string(),
            given_name: given.to_string(),
            family_name: family.to_string(),
            is_starred: starred,
            phone_numbers: if number.is_empty() {
                Vec::new()
            } else {
                vec![PhoneNumber::new("mobile", number)]
            },
        }
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+1 (555) 123-4567"), "15551234567");
        assert_eq!(digits_only("*86"), "86");
    }

    #[test]
    fn test_sort_starred_first() {
        let mut contacts = vec![
            contact("1", "Zoe", "A", false, "1"),
            contact("2", "Bob", "B", false, "2"),
            contact("3", "Yara", "C", true, "3"),
            contact("4", "Al", "D", true, "4"),
        ];
        sort_contacts(&mut contacts);
        let names: Vec<&str> = contacts.iter().map(|c| c.given_name.as_str()).collect();
        assert_eq!(names, ["Al", "Yara", "Bob", "Zoe"]);
    }

    #[test]
    fn test_is_listable() {
        assert!(contact("1", "Ann", "Lee", false, "555").is_listable());
        assert!(!contact("2", "Ann", "Lee", false, "").is_listable());
        assert!(!contact("3", "#Voicemail", "", false, "555").is_listable());
        assert!(!contact("4", "*Balance", "", false, "555").is_listable());
    }

    #[test]
    fn test_find_by_unique_given_name() {
        let contacts = vec![
            contact("1", "Ann", "Lee", false, "1"),
            contact("2", "Bob", "Lee", false, "2"),
        ];
        assert_eq!(find_contact_id_by_name(&contacts, "Ann").unwrap(), "1");
    }

    #[test]
    fn test_find_needs_family_name() {
        let contacts = vec![
            contact("1", "Ann", "Lee", false, "1"),
            contact("2", "Ann", "Kim", false, "2"),
        ];
        assert!(matches!(
            find_contact_id_by_name(&contacts, "Ann"),
            Err(ContactLookupError::FamilyNameNeeded)
        ));
        assert_eq!(find_contact_id_by_name(&contacts, "Ann Kim").unwrap(), "2");
    }

    #[test]
    fn test_find_no_match() {
        let contacts = vec![contact("1", "Ann", "Lee", false, "1")];
        let err = find_contact_id_by_name(&contacts, "Cat Stevens").unwrap_err();
        assert!(matches!(err, ContactLookupError::Ambiguous { count: 0, .. }));
        assert!(err.to_string().contains("Cat Stevens"));
    }
}
