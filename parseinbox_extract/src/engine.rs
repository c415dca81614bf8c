//! Extraction engine combining field extraction and user reconciliation.

use parseinbox_core::{FieldExtractor, GeneralInfo, Parse, UserReconciler, UserRecord};
use tracing::debug;

use crate::error::PatternError;
use crate::fields::RegexFieldExtractor;
use crate::labels::LabelSet;
use crate::reconcile::RegexUserReconciler;

/// Compiled patterns for one label set. Stateless between parses.
#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    fields: RegexFieldExtractor,
    users: RegexUserReconciler,
}

impl ExtractionEngine {
    /// Create a new extraction engine from a label set.
    ///
    /// # Errors
    /// Returns an error if a label is empty or pattern compilation fails.
    pub fn new(labels: &LabelSet) -> Result<Self, PatternError> {
        labels.validate()?;
        Ok(Self {
            fields: RegexFieldExtractor::new(labels)?,
            users: RegexUserReconciler::new(labels)?,
        })
    }

    /// Create an extraction engine with the default labels.
    ///
    /// # Errors
    /// Returns an error if default pattern compilation fails.
    pub fn with_defaults() -> Result<Self, PatternError> {
        Self::new(&LabelSet::default())
    }

    /// Parse one email body. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(&self, text: &str) -> Parse {
        let text = text.trim();
        debug!(len = text.len(), "Parsing email body");
        parseinbox_core::parse(text, self, self)
    }
}

impl FieldExtractor for ExtractionEngine {
    fn extract_general(&self, text: &str) -> GeneralInfo {
        self.fields.extract_general(text)
    }
}

impl UserReconciler for ExtractionEngine {
    fn reconcile(&self, text: &str) -> parseinbox_core::Result<Vec<UserRecord>> {
        self.users.reconcile(text)
    }
}
