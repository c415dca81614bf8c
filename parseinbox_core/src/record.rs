//! Records produced by a parse.
//!
//! Absence is modeled as `None` rather than a marker string, so an empty
//! captured value can never be confused with a missing one. Rendering the
//! absence marker (`N/A` by default) is left to the presentation layer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The five single-value fields of a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GeneralField {
    RequestorEmail,
    ClientName,
    ContractName,
    ContractId,
    AccessLevel,
}

impl GeneralField {
    pub const ALL: [Self; 5] = [
        Self::RequestorEmail,
        Self::ClientName,
        Self::ContractName,
        Self::ContractId,
        Self::AccessLevel,
    ];

    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequestorEmail => "requestor_email",
            Self::ClientName => "client_name",
            Self::ContractName => "contract_name",
            Self::ContractId => "contract_id",
            Self::AccessLevel => "access_level",
        }
    }

    /// Heading shown next to the value.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::RequestorEmail => "Requestor Email",
            Self::ClientName => "Client Name",
            Self::ContractName => "Contract Name",
            Self::ContractId => "Contract ID",
            Self::AccessLevel => "Access Level",
        }
    }
}

impl FromStr for GeneralField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "requestor_email" => Ok(Self::RequestorEmail),
            "client_name" => Ok(Self::ClientName),
            "contract_name" => Ok(Self::ContractName),
            "contract_id" => Ok(Self::ContractId),
            "access_level" => Ok(Self::AccessLevel),
            _ => Err("unknown general field"),
        }
    }
}

/// General information about the request. Replaced wholesale on every parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralInfo {
    pub requestor_email: Option<String>,
    pub client_name: Option<String>,
    pub contract_name: Option<String>,
    pub contract_id: Option<String>,
    pub access_level: Option<String>,
}

impl GeneralInfo {
    #[must_use]
    pub fn get(&self, field: GeneralField) -> Option<&str> {
        match field {
            GeneralField::RequestorEmail => self.requestor_email.as_deref(),
            GeneralField::ClientName => self.client_name.as_deref(),
            GeneralField::ContractName => self.contract_name.as_deref(),
            GeneralField::ContractId => self.contract_id.as_deref(),
            GeneralField::AccessLevel => self.access_level.as_deref(),
        }
    }

    pub fn set(&mut self, field: GeneralField, value: Option<String>) {
        let slot = match field {
            GeneralField::RequestorEmail => &mut self.requestor_email,
            GeneralField::ClientName => &mut self.client_name,
            GeneralField::ContractName => &mut self.contract_name,
            GeneralField::ContractId => &mut self.contract_id,
            GeneralField::AccessLevel => &mut self.access_level,
        };
        *slot = value;
    }

    /// Number of fields that were found.
    #[must_use]
    pub fn found_count(&self) -> usize {
        GeneralField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}

/// Columns of a user record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    FullName,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl UserField {
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

impl FromStr for UserField {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "full_name" => Ok(Self::FullName),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            _ => Err("unknown user field"),
        }
    }
}

/// One user, derived from an aligned (name, email, phone) triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub full_name: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

impl UserRecord {
    /// Build a record, splitting the full name into first and last parts.
    #[must_use]
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        let full_name = full_name.into();
        let (first_name, last_name) = split_full_name(&full_name);
        Self {
            full_name,
            first_name,
            last_name,
            email: email.into(),
            phone,
        }
    }

    #[must_use]
    pub fn get(&self, field: UserField) -> Option<&str> {
        match field {
            UserField::FullName => Some(self.full_name.as_str()),
            UserField::FirstName => Some(self.first_name.as_str()),
            UserField::LastName => self.last_name.as_deref(),
            UserField::Email => Some(self.email.as_str()),
            UserField::Phone => self.phone.as_deref(),
        }
    }
}

/// Split a full name on whitespace.
///
/// The first token is the first name; the remaining tokens, joined with
/// single spaces, form the last name. A single-token name has no last name.
#[must_use]
pub fn split_full_name(full_name: &str) -> (String, Option<String>) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = parts.collect();
    let last = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_tokens() {
        assert_eq!(
            split_full_name("Jane Doe"),
            ("Jane".to_string(), Some("Doe".to_string()))
        );
    }

    #[test]
    fn test_split_single_token() {
        assert_eq!(split_full_name("Prince"), ("Prince".to_string(), None));
    }

    #[test]
    fn test_split_middle_name_goes_to_last() {
        assert_eq!(
            split_full_name("Jane Q Doe"),
            ("Jane".to_string(), Some("Q Doe".to_string()))
        );
    }

    #[test]
    fn test_split_collapses_internal_whitespace() {
        assert_eq!(
            split_full_name("Jane   Q\tDoe"),
            ("Jane".to_string(), Some("Q Doe".to_string()))
        );
    }

    #[test]
    fn test_record_keeps_full_name_verbatim() {
        let user = UserRecord::new("Jane  Doe", "jane@x.com", None);
        assert_eq!(user.full_name, "Jane  Doe");
        assert_eq!(user.get(UserField::FirstName), Some("Jane"));
        assert_eq!(user.get(UserField::LastName), Some("Doe"));
        assert_eq!(user.get(UserField::Phone), None);
    }

    #[test]
    fn test_general_info_get_set() {
        let mut info = GeneralInfo::default();
        assert_eq!(info.found_count(), 0);

        info.set(GeneralField::ContractId, Some("C-42".to_string()));
        assert_eq!(info.get(GeneralField::ContractId), Some("C-42"));
        assert_eq!(info.get(GeneralField::ClientName), None);
        assert_eq!(info.found_count(), 1);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!(
            "requestor-email".parse::<GeneralField>(),
            Ok(GeneralField::RequestorEmail)
        );
        assert_eq!("Contract_ID".parse::<GeneralField>(), Ok(GeneralField::ContractId));
        assert_eq!("last-name".parse::<UserField>(), Ok(UserField::LastName));
        assert!("nickname".parse::<UserField>().is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_absent_fields_serialize_as_null() {
        let user = UserRecord::new("Prince", "p@x.com", None);
        let json = serde_json::to_value(&user).expect("record should serialize");
        assert!(json["last_name"].is_null());
        assert!(json["phone"].is_null());
        assert_eq!(json["first_name"], "Prince");
    }
}
