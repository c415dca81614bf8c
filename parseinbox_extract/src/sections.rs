//! Location and tokenization of the multi-value user sections.
//!
//! A section starts after the first occurrence of its label and colon, and
//! ends at the first following line that begins with any other known label,
//! or at end of text.

use regex::Regex;
use tracing::debug;

use crate::error::PatternError;
use crate::labels::LabelSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Names,
    Emails,
    Phones,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Names, Self::Emails, Self::Phones];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Names => "user_names",
            Self::Emails => "user_emails",
            Self::Phones => "user_phones",
        }
    }
}

/// Compiled start and end patterns for one section.
#[derive(Debug, Clone)]
pub struct SectionPattern {
    section: Section,
    start: Regex,
    end: Option<Regex>,
}

impl SectionPattern {
    pub fn new(section: Section, labels: &LabelSet) -> Result<Self, PatternError> {
        let label = labels.section(section);
        let start = compile(label, &format!(r"{}[ \t]*:", regex::escape(label)))?;

        let others: Vec<String> = labels
            .boundaries()
            .filter(|other| *other != label)
            .map(regex::escape)
            .collect();
        let end = if others.is_empty() {
            None
        } else {
            Some(compile(
                label,
                &format!(r"\n[ \t]*(?:{})[ \t]*:", others.join("|")),
            )?)
        };

        Ok(Self {
            section,
            start,
            end,
        })
    }

    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Raw text of the section, or `None` if its label does not occur.
    #[must_use]
    pub fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = self.start.find(text)?.end();
        let end = self
            .end
            .as_ref()
            .and_then(|re| re.find_at(text, start))
            .map_or(text.len(), |m| m.start());

        debug!(
            section = self.section.as_str(),
            start,
            end,
            "Located section"
        );
        Some(&text[start..end])
    }
}

/// Split section text on newlines and slashes into trimmed, non-empty tokens.
pub fn tokenize(section: &str) -> impl Iterator<Item = &str> {
    section
        .split(['\n', '/'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub(crate) fn compile(label: &str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Regex {
        label: label.to_string(),
        source,
    })
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
mod tests {
    use super::*;

    fn pattern(section: Section) -> SectionPattern {
        SectionPattern::new(section, &LabelSet::default()).expect("default labels should compile")
    }

    #[test]
    fn test_tokenize_mixed_separators() {
        let tokens: Vec<&str> = tokenize(" Jane Doe / John Smith\n\n  Ann Lee //\r\n").collect();
        assert_eq!(tokens, vec!["Jane Doe", "John Smith", "Ann Lee"]);
    }

    #[test]
    fn test_tokenize_blank() {
        assert_eq!(tokenize(" \n / \n").count(), 0);
    }

    #[test]
    fn test_section_ends_at_next_label() {
        let text = "User Full Name: Jane Doe\nJohn Smith\nUser Email Address: jane@x.com";
        assert_eq!(
            pattern(Section::Names).locate(text),
            Some(" Jane Doe\nJohn Smith")
        );
    }

    #[test]
    fn test_section_runs_to_end_of_text() {
        let text = "User Email Address: jane@x.com/john@x.com\n";
        assert_eq!(
            pattern(Section::Emails).locate(text),
            Some(" jane@x.com/john@x.com\n")
        );
    }

    #[test]
    fn test_phone_section_ends_at_company_domain() {
        let text = "User Phone Number: 555-0100\n555-0101\nCompany Domain: x.com";
        assert_eq!(
            pattern(Section::Phones).locate(text),
            Some(" 555-0100\n555-0101")
        );
    }

    #[test]
    fn test_section_ends_at_field_label() {
        let text = "User Email Address: jane@x.com\n  Requestor Email: boss@x.com";
        assert_eq!(pattern(Section::Emails).locate(text), Some(" jane@x.com"));
    }

    #[test]
    fn test_label_with_space_before_colon() {
        let text = "User Full Name : Jane Doe";
        assert_eq!(pattern(Section::Names).locate(text), Some(" Jane Doe"));
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(pattern(Section::Phones).locate("User Full Name: Jane"), None);
    }

    #[test]
    fn test_empty_section() {
        let text = "User Full Name:\nUser Email Address: jane@x.com";
        assert_eq!(pattern(Section::Names).locate(text), Some(""));
    }
}
