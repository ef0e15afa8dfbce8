use std::io;

use serde_json::Value;

use super::format;
use super::ledger_text::transaction_table;

pub fn render_entry(data: &Value) -> io::Result<String> {
    let record = data
        .get("record")
        .ok_or_else(|| io::Error::other("entry output requires record"))?;
    let mode = data.get("mode").and_then(Value::as_str).unwrap_or("create");

    let heading = match mode {
        "edit" => "Saved transaction edit:",
        "delete" => "Deleted transaction:",
        _ => "Saved new transaction:",
    };
    let flag = |key: &str| {
        let value = record.get(key).and_then(Value::as_bool).unwrap_or(false);
        let label = if value { "yes" } else { "no" };
        label.to_string()
    };
    let text = |value: &Value, key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };
    let rows_stored = data.get("rows_stored").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec![heading.to_string(), String::new()];
    lines.extend(transaction_table(std::slice::from_ref(record)));
    lines.push(String::new());
    lines.extend(format::key_value_rows(
        &[
            ("Id:", text(record, "id")),
            ("Expense:", flag("is_expense")),
            ("Transfer:", flag("is_transfer")),
            ("Pending:", flag("is_pending")),
            ("Edited:", flag("is_edited")),
            ("Records:", text(data, "records_path")),
            ("Stored:", format!("{rows_stored} transactions")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

/// Summary printed when the CSV went to a file rather than stdout.
pub fn render_export_summary(data: &Value) -> io::Result<String> {
    let path = data
        .get("output_path")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("export summary requires output_path"))?;
    let rows = data.get("rows_written").and_then(Value::as_i64).unwrap_or(0);
    Ok(format!("Exported {rows} transactions to {path}."))
}
