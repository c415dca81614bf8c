//! Label text for every field and section.
//!
//! Defaults match the request form as it is sent today. All of them can be
//! overridden from the config file when the form's wording drifts.

use parseinbox_core::GeneralField;
use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::sections::Section;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelSet {
    pub requestor_email: String,
    pub client_name: String,
    pub contract_name: String,
    pub contract_id: String,
    pub access_level: String,

    pub user_names: String,
    pub user_emails: String,
    pub user_phones: String,

    /// Extra labels that end a section without being extracted themselves.
    pub section_terminators: Vec<String>,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            requestor_email: "Requestor Email".to_string(),
            client_name: "Client Name".to_string(),
            contract_name: "Contract Name".to_string(),
            contract_id: "Contract ID".to_string(),
            access_level: "Which level does the user need access to?".to_string(),
            user_names: "User Full Name".to_string(),
            user_emails: "User Email Address".to_string(),
            user_phones: "User Phone Number".to_string(),
            section_terminators: vec!["Company Domain".to_string()],
        }
    }
}

impl LabelSet {
    #[must_use]
    pub fn field(&self, field: GeneralField) -> &str {
        match field {
            GeneralField::RequestorEmail => &self.requestor_email,
            GeneralField::ClientName => &self.client_name,
            GeneralField::ContractName => &self.contract_name,
            GeneralField::ContractId => &self.contract_id,
            GeneralField::AccessLevel => &self.access_level,
        }
    }

    #[must_use]
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Names => &self.user_names,
            Section::Emails => &self.user_emails,
            Section::Phones => &self.user_phones,
        }
    }

    /// Every label that can end a section: all field labels, all section
    /// labels and the configured terminators.
    pub fn boundaries(&self) -> impl Iterator<Item = &str> {
        GeneralField::ALL
            .iter()
            .map(|field| self.field(*field))
            .chain(Section::ALL.iter().map(|section| self.section(*section)))
            .chain(self.section_terminators.iter().map(String::as_str))
            .filter(|label| !label.trim().is_empty())
    }

    /// Reject labels that would match everywhere.
    pub fn validate(&self) -> Result<(), PatternError> {
        for field in GeneralField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(PatternError::EmptyLabel(field.as_str()));
            }
        }
        for section in Section::ALL {
            if self.section(section).trim().is_empty() {
                return Err(PatternError::EmptyLabel(section.as_str()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LabelSet::default().validate().is_ok());
    }

    #[test]
    fn test_empty_label_rejected() {
        let labels = LabelSet {
            contract_id: "  ".to_string(),
            ..LabelSet::default()
        };
        assert!(matches!(
            labels.validate(),
            Err(PatternError::EmptyLabel("contract_id"))
        ));
    }

    #[test]
    fn test_boundaries_include_terminators_and_skip_blank() {
        let labels = LabelSet {
            section_terminators: vec!["Company Domain".to_string(), String::new()],
            ..LabelSet::default()
        };
        let boundaries: Vec<&str> = labels.boundaries().collect();
        assert_eq!(boundaries.len(), 9);
        assert!(boundaries.contains(&"Company Domain"));
        assert!(boundaries.contains(&"User Phone Number"));
        assert!(boundaries.contains(&"Which level does the user need access to?"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_config_falls_back_to_defaults() {
        let labels: LabelSet = serde_json::from_str(r#"{"client_name": "Customer"}"#)
            .expect("partial label set should deserialize");
        assert_eq!(labels.client_name, "Customer");
        assert_eq!(labels.contract_id, "Contract ID");
        assert_eq!(labels.section_terminators, vec!["Company Domain".to_string()]);
    }
}
