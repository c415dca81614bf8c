//! Reconstruction of the user list from three independently delimited
//! sections.
//!
//! Names and emails are required and must produce the same number of
//! tokens; phones are optional and may be shorter. Records are paired by
//! position only.

use parseinbox_core::{ExtractError, UserReconciler, UserRecord};
use tracing::{debug, warn};

use crate::error::PatternError;
use crate::labels::LabelSet;
use crate::sections::{Section, SectionPattern, tokenize};

#[derive(Debug, Clone)]
pub struct RegexUserReconciler {
    names: SectionPattern,
    emails: SectionPattern,
    phones: SectionPattern,
}

impl RegexUserReconciler {
    pub fn new(labels: &LabelSet) -> Result<Self, PatternError> {
        Ok(Self {
            names: SectionPattern::new(Section::Names, labels)?,
            emails: SectionPattern::new(Section::Emails, labels)?,
            phones: SectionPattern::new(Section::Phones, labels)?,
        })
    }
}

impl UserReconciler for RegexUserReconciler {
    fn reconcile(&self, text: &str) -> parseinbox_core::Result<Vec<UserRecord>> {
        let (Some(names), Some(emails)) = (self.names.locate(text), self.emails.locate(text)) else {
            warn!("User name or email section not found");
            return Err(ExtractError::UsersNotFound);
        };

        let names: Vec<&str> = tokenize(names).collect();
        // Tokens without '@' are noise, not errors.
        let emails: Vec<&str> = tokenize(emails).filter(|t| t.contains('@')).collect();
        let phones: Option<Vec<&str>> = self.phones.locate(text).map(|s| tokenize(s).collect());

        debug!(
            names = names.len(),
            emails = emails.len(),
            phones = phones.as_ref().map(Vec::len),
            "Tokenized user sections"
        );

        if names.len() != emails.len() {
            warn!(
                names = names.len(),
                emails = emails.len(),
                "User name and email counts differ"
            );
            return Err(ExtractError::CountMismatch {
                names: names.len(),
                emails: emails.len(),
            });
        }

        Ok(align(&names, &emails, phones.as_deref()))
    }
}

/// Pair the i-th name with the i-th email and phone.
///
/// `names` and `emails` must have equal length. A missing phone section, or
/// an index past the end of a short phone list, leaves that phone absent.
#[must_use]
pub fn align(names: &[&str], emails: &[&str], phones: Option<&[&str]>) -> Vec<UserRecord> {
    names
        .iter()
        .zip(emails)
        .enumerate()
        .map(|(i, (name, email))| {
            let phone = phones
                .and_then(|phones| phones.get(i))
                .map(|phone| (*phone).to_string());
            UserRecord::new(*name, *email, phone)
        })
        .collect()
}
