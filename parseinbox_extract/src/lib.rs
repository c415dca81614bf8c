#![warn(
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

//! Label-anchored extraction of request fields and user lists.
//!
//! Labels are plain text from a [`LabelSet`]; they are escaped before being
//! compiled, so a label containing `?` or `(` matches literally.

mod engine;
mod error;
pub mod fields;
pub mod labels;
pub mod reconcile;
pub mod sections;

pub use engine::ExtractionEngine;
pub use error::PatternError;
pub use fields::RegexFieldExtractor;
pub use labels::LabelSet;
pub use reconcile::{RegexUserReconciler, align};
pub use sections::{Section, tokenize};
