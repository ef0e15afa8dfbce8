use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{EntryIssue, RecordIssue, RecordsSummary};

pub(crate) const RECORDS_HELP_COMMAND: &str = "expensetrack --help";
pub(crate) const RECORDS_HELP_SECTION_TITLE: &str = "Records File Troubleshooting";

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

    pub fn with_records_help_data(self, data: Value) -> Self {
        self.with_data(merge_records_help_data(data))
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `expensetrack {cmd} --help` for usage."),
            None => "Run `expensetrack --help` for usage.".to_string(),
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

    pub fn records_not_found(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "records_not_found",
            &format!("No records file exists at `{location}`."),
            vec![
                "Pass `--records <path>` to point at a JSON or CSV records file.".to_string(),
                "Or set `EXPENSETRACK_RECORDS` to the records file path.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn records_unreadable(path: &str, detail: &str) -> Self {
        Self::new(
            "records_unreadable",
            &format!("Could not read records from `{path}`: {detail}"),
            vec!["Verify the path exists and is readable.".to_string()],
        )
    }

    pub fn invalid_records_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported records format (JSON array or CSV).".to_string(),
                format!("Run `{RECORDS_HELP_COMMAND}` to confirm field requirements."),
            ],
        )
        .with_records_help_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn records_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "records_schema_mismatch",
            "CSV headers do not satisfy the records schema.",
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
            ],
        )
        .with_records_help_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn records_validation_failed(summary: RecordsSummary, issues: Vec<RecordIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "records_validation_failed",
            &format!("Records failed validation: {issue_count} rows need fixes."),
            vec![
                "Fix the listed issues in your records file.".to_string(),
                "Rerun the command once every row validates.".to_string(),
            ],
        )
        .with_records_help_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn entry_validation_failed(issues: Vec<EntryIssue>) -> Self {
        let fields = issues
            .iter()
            .map(|issue| issue.field.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        Self::new(
            "entry_validation_failed",
            &format!("Transaction entry is invalid: check {fields}."),
            vec!["Run `expensetrack entry --help` to review the entry fields.".to_string()],
        )
        .with_data(json!({
            "issues": issues,
        }))
    }

    pub fn transaction_not_found(id: &str) -> Self {
        Self::new(
            "transaction_not_found",
            &format!("No transaction with id `{id}` exists in the records file."),
            vec![
                "Run `expensetrack search <text> --json` to look up the transaction id.".to_string(),
                "Check that `--records` points at the file the transaction was saved to."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "id": id,
        }))
    }

    pub fn records_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "records_write_failed",
            &format!("Could not save records to `{location}`: {detail}"),
            vec!["Verify the records file and its directory are writable.".to_string()],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn export_failed(target: &str, detail: &str) -> Self {
        Self::new(
            "export_failed",
            &format!("Could not write CSV export to `{target}`: {detail}"),
            vec!["Choose a writable `--output` path or omit it to print to stdout.".to_string()],
        )
    }

    pub fn home_unresolved() -> Self {
        Self::new(
            "home_unresolved",
            "Could not resolve a home directory for the default records file.",
            vec![
                "Set `EXPENSETRACK_HOME` to a directory containing `transactions.json`.".to_string(),
                "Or pass `--records <path>` explicitly.".to_string(),
            ],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

fn merge_records_help_data(mut data: Value) -> Value {
    if !data.is_object() {
        data = json!({});
    }

    if let Some(object) = data.as_object_mut() {
        object.insert(
            "help_command".to_string(),
            Value::String(RECORDS_HELP_COMMAND.to_string()),
        );
        object.insert(
            "help_section_title".to_string(),
            Value::String(RECORDS_HELP_SECTION_TITLE.to_string()),
        );
    }

    data
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn command_hint_is_attached_to_invalid_arguments() {
        let error = ClientError::invalid_argument_for_command("bad date", Some("chart"));
        assert_eq!(error.code, "invalid_argument");
        assert_eq!(
            error.recovery_steps,
            vec!["Run `expensetrack chart --help` for usage.".to_string()]
        );
        assert_eq!(
            error.data.as_ref().and_then(|data| data["command_hint"].as_str()),
            Some("chart")
        );
    }

    #[test]
    fn records_format_errors_carry_help_metadata() {
        let error = ClientError::invalid_records_format("nope", "ndjson");
        let data = error.data.unwrap_or_default();
        assert_eq!(data["received_format"], "ndjson");
        assert_eq!(data["help_command"], "expensetrack --help");
        assert_eq!(data["help_section_title"], "Records File Troubleshooting");
    }
}
