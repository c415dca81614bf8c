//! Text and JSON views of a review state.

use parseinbox_core::{ExtractError, GeneralField, GeneralInfo, ReviewState, UserField, UserRecord};
use serde::Serialize;
use std::fmt::Write;

const TABLE_COLUMNS: [UserField; 4] = [
    UserField::FirstName,
    UserField::LastName,
    UserField::Email,
    UserField::Phone,
];

/// Render general information, the users table and, if a row is selected,
/// its details.
pub fn text(state: &ReviewState, selected: Option<&UserRecord>, absent: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "General Information");
    let width = label_width(GeneralField::ALL.iter().map(GeneralField::title));
    for field in GeneralField::ALL {
        let value = state.general().get(field).unwrap_or(absent);
        let _ = writeln!(out, "  {:<width$}  {value}", field.title());
    }
    out.push('\n');

    let _ = writeln!(out, "Users");
    if state.users().is_empty() {
        let _ = writeln!(out, "  (none)");
    } else {
        write_table(&mut out, state.users(), absent);
    }

    if let Some(user) = selected {
        out.push('\n');
        let _ = writeln!(out, "User Details");
        let width = label_width(UserField::ALL.iter().map(UserField::title));
        for field in UserField::ALL {
            let value = user.get(field).unwrap_or(absent);
            let _ = writeln!(out, "  {:<width$}  {value}", field.title());
        }
    }

    out
}

fn write_table(out: &mut String, users: &[UserRecord], absent: &str) {
    let rows: Vec<Vec<&str>> = users
        .iter()
        .map(|user| {
            TABLE_COLUMNS
                .iter()
                .map(|field| user.get(*field).unwrap_or(absent))
                .collect()
        })
        .collect();

    let index_width = (users.len() - 1).to_string().len().max(1);
    let widths: Vec<usize> = TABLE_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, field)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(field.title().len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let _ = write!(out, "  {:<index_width$}", "#");
    for (field, width) in TABLE_COLUMNS.iter().zip(&widths) {
        let _ = write!(out, "  {:<width$}", field.title());
    }
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        let _ = write!(out, "  {i:<index_width$}");
        for (cell, width) in row.iter().zip(&widths) {
            let _ = write!(out, "  {cell:<width$}");
        }
        out.push('\n');
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(str::len).max().unwrap_or_default()
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    general: &'a GeneralInfo,
    users: &'a [UserRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a UserRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Render the state as pretty JSON. Absent values are `null`.
pub fn json(
    state: &ReviewState,
    selected: Option<&UserRecord>,
    error: Option<ExtractError>,
) -> anyhow::Result<String> {
    let report = Report {
        general: state.general(),
        users: state.users(),
        selected,
        error: error.map(|e| e.to_string()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parseinbox_core::Parse;

    fn state() -> ReviewState {
        let mut state = ReviewState::new();
        let _ = state.apply(Parse {
            general: GeneralInfo {
                requestor_email: Some("a@x.com".to_string()),
                ..GeneralInfo::default()
            },
            users: Ok(vec![
                UserRecord::new("Jane Doe", "jane@x.com", Some("555-0100".to_string())),
                UserRecord::new("Prince", "prince@x.com", None),
            ]),
        });
        state
    }

    #[test]
    fn test_text_general_and_table() {
        let state = state();
        let out = text(&state, None, "N/A");

        assert!(out.contains("Requestor Email  a@x.com"));
        assert!(out.contains("Client Name      N/A"));
        assert!(out.contains("First Name"));
        assert!(out.contains("Jane"));
        assert!(out.contains("prince@x.com"));
        assert!(!out.contains("User Details"));
    }

    #[test]
    fn test_text_selected_details() {
        let state = state();
        let out = text(&state, state.select(1), "-");

        assert!(out.contains("User Details"));
        assert!(out.contains("Full Name   Prince"));
        assert!(out.contains("Last Name   -"));
        assert!(out.contains("Phone       -"));
    }

    #[test]
    fn test_text_empty_users() {
        let out = text(&ReviewState::new(), None, "N/A");
        assert!(out.contains("Users\n  (none)"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_json_report() {
        let state = state();
        let out = json(&state, state.select(0), None).expect("report should serialize");
        let value: serde_json::Value = serde_json::from_str(&out).expect("report should be JSON");

        assert_eq!(value["general"]["requestor_email"], "a@x.com");
        assert!(value["general"]["client_name"].is_null());
        assert_eq!(value["users"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["selected"]["first_name"], "Jane");
        assert!(value.get("error").is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_json_report_with_error() {
        let out = json(&ReviewState::new(), None, Some(ExtractError::UsersNotFound))
            .expect("report should serialize");
        let value: serde_json::Value = serde_json::from_str(&out).expect("report should be JSON");

        assert_eq!(value["error"], "Could not find users in the email!");
        assert!(value.get("selected").is_none());
    }
}
