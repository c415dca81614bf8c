//! Single-value field extraction.

use parseinbox_core::{FieldExtractor, GeneralField, GeneralInfo};
use regex::Regex;
use tracing::debug;

use crate::error::PatternError;
use crate::labels::LabelSet;
use crate::sections::compile;

/// Finds `Label: value` anywhere in the text and captures the rest of the
/// line. Only the first occurrence of a label counts.
#[derive(Debug, Clone)]
pub struct RegexFieldExtractor {
    patterns: Vec<(GeneralField, Regex)>,
}

impl RegexFieldExtractor {
    pub fn new(labels: &LabelSet) -> Result<Self, PatternError> {
        let patterns = GeneralField::ALL
            .iter()
            .map(|field| {
                let label = labels.field(*field);
                let pattern = format!(r"{}[ \t]*:[ \t]*([^\r\n]*)", regex::escape(label));
                compile(label, &pattern).map(|re| (*field, re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Value of one field, with trailing whitespace removed.
    ///
    /// A label followed only by whitespace counts as absent.
    #[must_use]
    pub fn capture(&self, field: GeneralField, text: &str) -> Option<String> {
        let (_, re) = self.patterns.iter().find(|(f, _)| *f == field)?;
        let value = re.captures(text)?.get(1)?.as_str().trim_end();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

impl FieldExtractor for RegexFieldExtractor {
    fn extract_general(&self, text: &str) -> GeneralInfo {
        let mut info = GeneralInfo::default();
        for field in GeneralField::ALL {
            let value = self.capture(field, text);
            debug!(field = field.as_str(), found = value.is_some(), "Extracted field");
            info.set(field, value);
        }
        info
    }
}
