use thiserror::Error;

/// A label set could not be compiled into patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("label for {0} is empty")]
    EmptyLabel(&'static str),

    #[error("invalid pattern for label {label:?}: {source}")]
    Regex {
        label: String,
        #[source]
        source: regex::Error,
    },
}
