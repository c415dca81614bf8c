use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Hard failures of the user-list reconciliation.
///
/// Missing general-info fields are never errors; they degrade to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The name section or the email section label is absent.
    #[error("Could not find users in the email!")]
    UsersNotFound,

    /// Valid name and email token counts differ, so positional alignment is
    /// meaningless.
    #[error("Mismatch in user names and emails count! ({names} names, {emails} emails)")]
    CountMismatch { names: usize, emails: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ExtractError::UsersNotFound.to_string(),
            "Could not find users in the email!"
        );
        assert_eq!(
            ExtractError::CountMismatch {
                names: 2,
                emails: 1
            }
            .to_string(),
            "Mismatch in user names and emails count! (2 names, 1 emails)"
        );
    }
}
