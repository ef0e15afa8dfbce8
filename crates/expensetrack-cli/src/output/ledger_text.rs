use std::io;
use std::str::FromStr;

use expensetrack_client::aggregate::amount::format_amount;
use rust_decimal::Decimal;
use serde_json::Value;

use super::format::{self, Column};

const EMPTY_LEDGER_HINT: [&str; 2] = [
    "Point `--records` at a JSON or CSV transactions file,",
    "or run `expensetrack --help` for the records format.",
];

pub fn render_months(data: &Value) -> io::Result<String> {
    let months = data
        .get("months")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("months output requires months"))?;
    let query = data.get("query").and_then(Value::as_str).unwrap_or("");

    if months.is_empty() {
        let mut lines = vec![if query.is_empty() {
            "No transactions found.".to_string()
        } else {
            format!("No transactions match \"{query}\".")
        }];
        if query.is_empty() {
            lines.push(String::new());
            lines.extend(EMPTY_LEDGER_HINT.iter().map(|line| line.to_string()));
        }
        return Ok(lines.join("\n"));
    }

    let mut lines = Vec::new();
    for (index, month) in months.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        let label = month.get("month").and_then(Value::as_str).unwrap_or("unknown");
        let count = month
            .get("transaction_count")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        lines.push(format!("{label} ({count} {})", plural(count, "transaction")));

        let rows = month
            .get("transactions")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        lines.extend(transaction_table(rows));
    }

    Ok(lines.join("\n"))
}

pub fn render_chart(data: &Value) -> io::Result<String> {
    let points = data
        .get("points")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("chart output requires points"))?;

    let mut lines = vec!["Month-to-date spending:".to_string(), String::new()];
    lines.extend(format::key_value_rows(&month_summary(data), 2));

    if points.is_empty() {
        lines.push(String::new());
        lines.push("No completed days this month yet.".to_string());
        return Ok(lines.join("\n"));
    }

    lines.push(String::new());
    lines.push("Daily running total:".to_string());
    lines.extend(point_table(points));
    Ok(lines.join("\n"))
}

pub fn render_search(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("search output requires rows"))?;
    let query = data.get("query").and_then(Value::as_str).unwrap_or("");

    if rows.is_empty() {
        return Ok(format!("No transactions match \"{query}\"."));
    }

    let count = rows.len() as i64;
    let mut lines = vec![
        format!("{count} {} match \"{query}\":", plural(count, "transaction")),
        String::new(),
    ];
    lines.extend(transaction_table(rows));
    Ok(lines.join("\n"))
}

pub fn render_overview(data: &Value) -> io::Result<String> {
    let recent = data
        .get("recent")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("overview output requires recent"))?;
    let points = data
        .get("points")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut lines = vec!["Overview:".to_string(), String::new()];
    lines.extend(format::key_value_rows(&month_summary(data), 2));

    if !points.is_empty() {
        lines.push(String::new());
        lines.push("Daily running total:".to_string());
        lines.extend(point_table(points));
    }

    lines.push(String::new());
    if recent.is_empty() {
        lines.push("No transactions found.".to_string());
        lines.push(String::new());
        lines.extend(EMPTY_LEDGER_HINT.iter().map(|line| line.to_string()));
    } else {
        lines.push("Recent transactions:".to_string());
        lines.extend(transaction_table(recent));
    }
    Ok(lines.join("\n"))
}

fn month_summary(data: &Value) -> Vec<(&'static str, String)> {
    vec![
        ("Today:", text_field(data, "today")),
        (
            "Month to date:",
            money(data.get("month_to_date_total").unwrap_or(&Value::Null)),
        ),
    ]
}

fn point_table(points: &[Value]) -> Vec<String> {
    let columns = [Column::left("Date"), Column::right("Total")];
    let rows = points
        .iter()
        .map(|point| {
            vec![
                text_field(point, "date"),
                money(point.get("cumulative_total").unwrap_or(&Value::Null)),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table_or_blocks(&columns, &rows, format::terminal_width(), "Day")
}

pub(super) fn transaction_table(rows: &[Value]) -> Vec<String> {
    let columns = [
        Column::left("Date"),
        Column::left("Merchant"),
        Column::left("Category"),
        Column::right("Amount"),
        Column::left("Account"),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text_field(row, "date"),
                text_field(row, "merchant"),
                text_field(row, "category"),
                signed_money(row),
                text_field(row, "account"),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Transaction",
    )
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Amounts arrive as decimal strings and are reformatted without passing
/// through a float.
fn money(value: &Value) -> String {
    value
        .as_str()
        .and_then(|text| Decimal::from_str(text).ok())
        .map(format_amount)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Debits print with a leading minus so money out reads at a glance.
fn signed_money(row: &Value) -> String {
    let amount = money(row.get("amount").unwrap_or(&Value::Null));
    match row.get("type").and_then(Value::as_str) {
        Some("debit") => format!("-{amount}"),
        _ => amount,
    }
}

fn plural(count: i64, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_chart, render_months, render_overview, render_search};

    fn row(id: &str, date: &str, merchant: &str, amount: &str, kind: &str) -> serde_json::Value {
        json!({
            "id": id,
            "date": date,
            "merchant": merchant,
            "category": "Dining",
            "account": "Visa",
            "amount": amount,
            "type": kind,
        })
    }

    #[test]
    fn months_render_a_heading_per_bucket() {
        let data = json!({
            "query": "",
            "months": [
                {
                    "month": "September 2024",
                    "transaction_count": 2,
                    "transactions": [
                        row("a", "09/03/2024", "Cafe", "4.50", "debit"),
                        row("b", "09/02/2024", "Refund", "20.00", "credit"),
                    ],
                },
                {
                    "month": "August 2024",
                    "transaction_count": 1,
                    "transactions": [row("c", "08/28/2024", "Books", "12.00", "debit")],
                },
            ],
        });

        let rendered = render_months(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("September 2024 (2 transactions)"));
            assert!(text.contains("August 2024 (1 transaction)"));
            assert!(text.contains("-4.50"));
            assert!(text.contains("20.00"));
            assert!(!text.contains("-20.00"));
        }
    }

    #[test]
    fn months_with_query_and_no_matches_names_the_query() {
        let rendered = render_months(&json!({ "query": "zzz", "months": [] }));
        assert_eq!(
            rendered.ok().as_deref(),
            Some("No transactions match \"zzz\".")
        );
    }

    #[test]
    fn chart_lists_each_completed_day() {
        let data = json!({
            "today": "09/03/2024",
            "month_to_date_total": "30.00",
            "points": [
                { "date": "09/01/2024", "cumulative_total": "50.00" },
                { "date": "09/02/2024", "cumulative_total": "30.00" },
            ],
        });

        let rendered = render_chart(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("  Month to date:  30.00"));
            assert!(text.contains("09/01/2024"));
            assert!(text.contains("50.00"));
        }
    }

    #[test]
    fn chart_on_first_day_explains_empty_series() {
        let data = json!({ "today": "09/01/2024", "month_to_date_total": "0.00", "points": [] });
        let rendered = render_chart(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No completed days this month yet."));
        }
    }

    #[test]
    fn search_and_overview_render_transaction_tables() {
        let search = render_search(&json!({
            "query": "cafe",
            "rows": [row("a", "09/03/2024", "Cafe", "4.50", "debit")],
        }));
        assert!(search.is_ok());
        if let Ok(text) = search {
            assert!(text.starts_with("1 transaction match \"cafe\":"));
        }

        let overview = render_overview(&json!({
            "today": "09/04/2024",
            "month_to_date_total": "4.50",
            "points": [],
            "recent": [row("a", "09/03/2024", "Cafe", "4.50", "debit")],
        }));
        assert!(overview.is_ok());
        if let Ok(text) = overview {
            assert!(text.contains("Recent transactions:"));
            assert!(text.contains("Cafe"));
        }
    }

    #[test]
    fn large_amounts_render_exactly() {
        let rendered = render_search(&json!({
            "query": "wire",
            "rows": [row("w", "09/03/2024", "Wire", "12345678901234567.89", "credit")],
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("12345678901234567.89"));
        }
    }
}
