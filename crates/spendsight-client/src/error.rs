use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const LEDGER_HELP_COMMAND: &str = "spendsight report category --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `spendsight {cmd} --help` for usage."),
            None => "Run `spendsight --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn input_empty(what: &str) -> Self {
        Self::new(
            "input_empty",
            &format!("The {what} contains no transactions."),
            vec![
                "Check that the ledger file has a header row followed by transaction rows."
                    .to_string(),
                format!("Run `{LEDGER_HELP_COMMAND}` to review the expected columns."),
            ],
        )
    }

    pub fn schema_missing(field: &str, actual_headers: &[String]) -> Self {
        Self::new(
            "schema_missing",
            &format!("Required field `{field}` is missing from the ledger."),
            vec![
                format!("Add a `{field}` column to the ledger."),
                format!("Run `{LEDGER_HELP_COMMAND}` to review the expected columns."),
            ],
        )
        .with_data(json!({
            "missing_field": field,
            "actual_headers": actual_headers,
        }))
    }

    pub fn malformed_reference_date(value: &str, expected_format: &str) -> Self {
        Self::new(
            "malformed_reference_date",
            &format!("Reference date \"{value}\" does not match {expected_format}."),
            vec![format!(
                "Pass the reference date as {expected_format} with real calendar values."
            )],
        )
        .with_data(json!({
            "received": value,
            "expected": expected_format,
        }))
    }

    pub fn invalid_collection(received_kind: &str) -> Self {
        Self::new(
            "invalid_collection",
            &format!("Expected an array of transaction records, got {received_kind}."),
            vec!["Provide a JSON array of transaction objects.".to_string()],
        )
        .with_data(json!({
            "received_kind": received_kind,
        }))
    }

    pub fn ledger_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_unreadable",
            &format!("Could not read ledger `{location}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Supported ledgers: .csv, .json, .xlsx, .xls, .xlsm, .ods".to_string(),
            ],
        )
    }

    pub fn report_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "report_write_failed",
            &format!("Could not write report to `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or pass a different --output path."
            )],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn schema_missing_carries_field_and_headers() {
        let error = ClientError::schema_missing("operation_date", &["category".to_string()]);
        assert_eq!(error.code, "schema_missing");
        assert!(error.message.contains("operation_date"));
        let data = error.data.unwrap_or_default();
        assert_eq!(data["missing_field"], "operation_date");
        assert_eq!(data["actual_headers"][0], "category");
    }

    #[test]
    fn ledger_shape_errors_point_at_the_help_that_lists_columns() {
        let expected = "Run `spendsight report category --help` to review the expected columns.";
        let missing = ClientError::schema_missing("amount", &[]);
        let empty = ClientError::input_empty("ledger");
        assert!(missing.recovery_steps.iter().any(|step| step == expected));
        assert!(empty.recovery_steps.iter().any(|step| step == expected));
    }

    #[test]
    fn command_scoped_invalid_argument_points_at_command_help() {
        let error = ClientError::invalid_argument_for_command("bad", Some("report category"));
        assert_eq!(error.code, "invalid_argument");
        assert_eq!(
            error.recovery_steps,
            vec!["Run `spendsight report category --help` for usage.".to_string()]
        );
    }
}
