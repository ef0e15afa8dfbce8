mod entry_text;
mod error_text;
mod format;
mod json;
mod ledger_text;
mod mode;

use std::io;

use expensetrack_client::{ClientError, SuccessEnvelope};
use serde_json::Value;

use crate::stdout_io::{write_stdout_line, write_stdout_raw};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    if mode == OutputMode::Text
        && let Some(csv) = success.data.get("csv").and_then(Value::as_str)
    {
        return write_stdout_raw(csv);
    }

    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "months" => ledger_text::render_months(&success.data),
        "chart" => ledger_text::render_chart(&success.data),
        "search" => ledger_text::render_search(&success.data),
        "overview" => ledger_text::render_overview(&success.data),
        "export" => entry_text::render_export_summary(&success.data),
        "entry create" | "entry edit" | "entry delete" => entry_text::render_entry(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
