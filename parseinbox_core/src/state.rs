//! The presentation layer's view of the last parse.
//!
//! The only state that outlives a parse is the last successfully produced
//! user list, kept so a selected row can be mapped back to its record.

use tracing::debug;

use crate::{GeneralInfo, Parse, Result, UserRecord};

/// Look up the record at a zero-based row index.
///
/// A stale index after a re-parse shrank the list yields `None`.
#[must_use]
pub fn select(users: &[UserRecord], index: usize) -> Option<&UserRecord> {
    users.get(index)
}

#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    general: GeneralInfo,
    users: Vec<UserRecord>,
}

impl ReviewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a parse outcome.
    ///
    /// General info is always overwritten. The user list is replaced in full
    /// on success and left untouched on failure; the failure is returned so
    /// the caller can surface it.
    pub fn apply(&mut self, parse: Parse) -> Result<usize> {
        self.general = parse.general;
        let users = parse.users?;
        debug!(
            previous = self.users.len(),
            current = users.len(),
            "Replacing user list"
        );
        self.users = users;
        Ok(self.users.len())
    }

    #[must_use]
    pub const fn general(&self) -> &GeneralInfo {
        &self.general
    }

    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn select(&self, index: usize) -> Option<&UserRecord> {
        select(&self.users, index)
    }
}
