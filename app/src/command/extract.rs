use anyhow::Context;
use parseinbox_config::{Config, OutputFormat};
use parseinbox_core::{GeneralField, ReviewState, UserField, UserRecord};
use parseinbox_extract::ExtractionEngine;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

use crate::{clipboard, render};

/// A single displayed value that can be copied out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    General(GeneralField),
    User(UserField),
}

impl FromStr for CopyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneralField::from_str(s)
            .map(Self::General)
            .or_else(|_| UserField::from_str(s).map(Self::User))
            .map_err(|_| {
                let names: Vec<&str> = GeneralField::ALL
                    .iter()
                    .map(GeneralField::as_str)
                    .chain(UserField::ALL.iter().map(UserField::as_str))
                    .collect();
                format!("unknown field {s:?}, expected one of: {}", names.join(", "))
            })
    }
}

impl CopyTarget {
    /// The value as it is displayed, with absent fields rendered as `absent`.
    pub fn resolve<'a>(
        self,
        state: &'a ReviewState,
        selected: Option<&'a UserRecord>,
        absent: &'a str,
    ) -> anyhow::Result<&'a str> {
        match self {
            Self::General(field) => Ok(state.general().get(field).unwrap_or(absent)),
            Self::User(field) => {
                let user = selected.ok_or_else(|| {
                    anyhow::anyhow!(
                        "Copying {} requires a selected user (--select)",
                        field.as_str()
                    )
                })?;
                Ok(user.get(field).unwrap_or(absent))
            }
        }
    }
}

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Email body file; stdin when `None`
    pub file: Option<PathBuf>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Zero-based row to show details for
    pub select: Option<usize>,
    /// Value to copy to the clipboard
    pub copy: Option<CopyTarget>,
}

/// Strategy for extracting a request from an email body.
///
/// General information is always printed. A user-list failure is reported
/// after the output and makes the command fail.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let engine =
            ExtractionEngine::new(&config.labels).context("Invalid label configuration")?;

        let body = read_body(input.file.as_deref())?;
        info!(bytes = body.len(), "Read email body");

        let mut state = ReviewState::new();
        let outcome = state.apply(engine.parse(&body));
        if let Ok(count) = outcome {
            info!(users = count, "Extracted users");
        }

        let selected = input.select.and_then(|index| {
            let user = state.select(index);
            if user.is_none() {
                warn!(
                    index,
                    users = state.users().len(),
                    "Selected row is out of range"
                );
            }
            user
        });

        let absent = config.display.absent_marker.as_str();
        match input.format.unwrap_or(config.display.format) {
            OutputFormat::Text => print!("{}", render::text(&state, selected, absent)),
            OutputFormat::Json => {
                println!("{}", render::json(&state, selected, outcome.err())?);
            }
        }

        if let Some(target) = input.copy {
            let value = target.resolve(&state, selected, absent)?;
            clipboard::copy(value).context("Failed to copy text")?;
            info!(?target, "Copied value to clipboard");
        }

        outcome?;
        Ok(())
    }
}

fn read_body(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read email body from stdin")?;
            Ok(body)
        }
    }
}
