#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn transaction(
    id: &str,
    date: &str,
    merchant: &str,
    amount: &str,
    transaction_type: &str,
    category_id: i64,
) -> Value {
    let is_expense = !matches!(category_id, 7 | 9 | 701);
    json!({
        "id": id,
        "date": date,
        "institution": "HSBC HONG KONG",
        "account": "Visa HSBC HONG KONG",
        "merchant": merchant,
        "amount": amount,
        "type": transaction_type,
        "categoryId": category_id,
        "category": if is_expense { "Shopping" } else { "Income" },
        "isPending": false,
        "isTransfer": category_id == 9,
        "isExpense": is_expense,
        "isEdited": false,
    })
}

/// Writes rows as `transactions.json` inside `home`, where the default
/// records path resolution looks for them.
pub fn write_home_records(home: &Path, rows: &[Value]) -> std::io::Result<PathBuf> {
    write_fixture_json(home, "transactions.json", rows)
}

pub fn write_fixture_json(dir: &Path, name: &str, rows: &[Value]) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    fs::write(&path, body)?;
    Ok(path)
}

pub fn write_fixture_text(dir: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

pub fn september_ledger() -> Vec<Value> {
    vec![
        transaction("t1", "08/28/2024", "Bookshop", "12.00", "debit", 801),
        transaction("t2", "09/01/2024", "Grocer", "50.00", "debit", 801),
        transaction("t3", "09/02/2024", "Grocer", "20.00", "credit", 801),
        transaction("t4", "09/02/2024", "Payroll", "3000.00", "credit", 7),
        transaction("t5", "09/03/2024", "Cafe", "4.50", "debit", 801),
        transaction("t6", "07/15/2024", "Bookshop", "8.25", "debit", 801),
        transaction("t7", "09/04/2024", "Cinema", "15.00", "debit", 801),
    ]
}

pub fn string_field(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).and_then(Value::as_str).map(str::to_string)
}
