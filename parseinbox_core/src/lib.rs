#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Data model and extraction contracts for provisioning-request emails.
//!
//! The matching strategy lives behind [`FieldExtractor`] and
//! [`UserReconciler`]; everything here is independent of how labels are
//! actually located in the text.

pub mod error;
pub mod record;
pub mod state;

pub use error::{ExtractError, Result};
pub use record::{GeneralField, GeneralInfo, UserField, UserRecord, split_full_name};
pub use state::{ReviewState, select};

/// Locates the single-value labeled fields of a request.
///
/// Extraction never fails: a field that cannot be found is `None`.
pub trait FieldExtractor {
    fn extract_general(&self, text: &str) -> GeneralInfo;
}

/// Rebuilds the ordered user list from the name, email and phone sections.
pub trait UserReconciler {
    fn reconcile(&self, text: &str) -> Result<Vec<UserRecord>>;
}

/// Outcome of one parse invocation.
///
/// General info is always present; the user list is either complete or an
/// error, never partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub general: GeneralInfo,
    pub users: Result<Vec<UserRecord>>,
}

impl Parse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.users.is_ok()
    }
}

/// Run both extractors over the same input.
///
/// The two passes share nothing, so their order does not matter.
pub fn parse<F, U>(text: &str, fields: &F, users: &U) -> Parse
where
    F: FieldExtractor + ?Sized,
    U: UserReconciler + ?Sized,
{
    Parse {
        general: fields.extract_general(text),
        users: users.reconcile(text),
    }
}
