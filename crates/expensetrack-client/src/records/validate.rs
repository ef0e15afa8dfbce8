use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::contracts::types::{RecordIssue, RecordsSummary};
use crate::records::parse::RawRecord;
use crate::records::{TransactionRecord, TransactionType};
use crate::{ClientError, ClientResult};

pub(crate) fn validate_rows(raw_rows: Vec<RawRecord>) -> ClientResult<Vec<TransactionRecord>> {
    let total_rows = raw_rows.len();
    let mut records = Vec::with_capacity(total_rows);
    let mut issues = Vec::new();

    for raw in raw_rows {
        let mut row_issues = Vec::new();
        let row = raw.row;

        let id = validate_required(row, "id", raw.id, &mut row_issues);
        // Date format is checked lazily by the aggregator, not here.
        let created_at = validate_required(row, "date", raw.date, &mut row_issues);
        let amount = validate_amount(row, raw.amount, &mut row_issues);
        let transaction_type = validate_type(row, raw.transaction_type, &mut row_issues);
        let category_id = validate_category_id(row, raw.category_id, &mut row_issues);
        let is_pending = validate_flag(row, "is_pending", raw.is_pending, &mut row_issues);
        let is_transfer = validate_flag(row, "is_transfer", raw.is_transfer, &mut row_issues);
        let is_expense = validate_flag(row, "is_expense", raw.is_expense, &mut row_issues);
        let is_edited = validate_flag(row, "is_edited", raw.is_edited, &mut row_issues);

        match (id, created_at, amount, transaction_type) {
            (Some(id), Some(created_at), Some(amount), Some(transaction_type))
                if row_issues.is_empty() =>
            {
                records.push(TransactionRecord {
                    id,
                    created_at,
                    institution: raw.institution.unwrap_or_default(),
                    account: raw.account.unwrap_or_default(),
                    merchant: raw.merchant.unwrap_or_default(),
                    amount,
                    transaction_type,
                    category_id,
                    category: raw.category.unwrap_or_default(),
                    is_pending,
                    is_transfer,
                    is_expense,
                    is_edited,
                });
            }
            _ => issues.extend(row_issues),
        }
    }

    if issues.is_empty() {
        return Ok(records);
    }

    let summary = RecordsSummary {
        rows_read: total_rows as i64,
        rows_valid: records.len() as i64,
        rows_invalid: issues
            .iter()
            .map(|issue| issue.row)
            .collect::<HashSet<i64>>()
            .len() as i64,
    };
    tracing::warn!(
        rows_read = summary.rows_read,
        rows_invalid = summary.rows_invalid,
        "records failed validation"
    );
    Err(ClientError::records_validation_failed(summary, issues))
}

pub(crate) fn parse_amount(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn validate_required(
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<RecordIssue>,
) -> Option<String> {
    let normalized = normalize_optional(value);
    if normalized.is_none() {
        issues.push(issue(
            row,
            field,
            "missing_required_field",
            &format!("{field} must be present and non-empty."),
            Some("non-empty string"),
            Some(""),
        ));
    }
    normalized
}

fn validate_amount(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RecordIssue>,
) -> Option<Decimal> {
    let Some(candidate) = normalize_optional(value) else {
        issues.push(issue(
            row,
            "amount",
            "missing_required_field",
            "amount must be present and non-empty.",
            Some("non-negative decimal"),
            Some(""),
        ));
        return None;
    };

    match parse_amount(&candidate) {
        Some(amount) if amount >= Decimal::ZERO => Some(amount),
        Some(_) => {
            issues.push(issue(
                row,
                "amount",
                "negative_amount",
                "amount is a magnitude; use `type` to mark money in or out.",
                Some("non-negative decimal"),
                Some(&candidate),
            ));
            None
        }
        None => {
            issues.push(issue(
                row,
                "amount",
                "invalid_amount",
                "amount must be a decimal number.",
                Some("non-negative decimal"),
                Some(&candidate),
            ));
            None
        }
    }
}

fn validate_type(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RecordIssue>,
) -> Option<TransactionType> {
    let candidate = normalize_optional(value).unwrap_or_default();
    let parsed = TransactionType::parse(&candidate);
    if parsed.is_none() {
        issues.push(issue(
            row,
            "type",
            "invalid_type",
            "type must be `debit` or `credit`.",
            Some("debit|credit"),
            Some(&candidate),
        ));
    }
    parsed
}

fn validate_category_id(row: i64, value: Option<String>, issues: &mut Vec<RecordIssue>) -> i64 {
    let Some(candidate) = normalize_optional(value) else {
        return 0;
    };
    match candidate.parse::<i64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            issues.push(issue(
                row,
                "category_id",
                "invalid_category_id",
                "category_id must be an integer.",
                Some("integer"),
                Some(&candidate),
            ));
            0
        }
    }
}

fn validate_flag(row: i64, field: &str, value: Option<String>, issues: &mut Vec<RecordIssue>) -> bool {
    let Some(candidate) = normalize_optional(value) else {
        return false;
    };
    match candidate.to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => {
            issues.push(issue(
                row,
                field,
                "invalid_flag",
                &format!("{field} must be `true` or `false`."),
                Some("true|false"),
                Some(&candidate),
            ));
            false
        }
    }
}

fn issue(
    row: i64,
    field: &str,
    code: &str,
    description: &str,
    expected: Option<&str>,
    received: Option<&str>,
) -> RecordIssue {
    RecordIssue {
        row,
        field: field.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        expected: expected.map(str::to_string),
        received: received.map(str::to_string),
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|inner| inner.trim().to_string())
        .filter(|inner| !inner.is_empty())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{parse_amount, validate_rows};
    use crate::records::TransactionType;
    use crate::records::parse::RawRecord;

    fn raw(row: i64, amount: &str, transaction_type: &str) -> RawRecord {
        RawRecord {
            row,
            id: Some(format!("t{row}")),
            date: Some("09/03/2024".to_string()),
            amount: Some(amount.to_string()),
            transaction_type: Some(transaction_type.to_string()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn valid_rows_fill_optional_fields_with_defaults() {
        let result = validate_rows(vec![raw(1, "12.5", "Debit")]);
        assert!(result.is_ok());
        if let Ok(records) = result {
            let record = &records[0];
            assert_eq!(record.amount, Decimal::new(125, 1));
            assert_eq!(record.transaction_type, TransactionType::Debit);
            assert_eq!(record.category_id, 0);
            assert_eq!(record.merchant, "");
            assert!(!record.is_expense);
        }
    }

    #[test]
    fn unparseable_dates_are_kept_for_the_aggregator_to_handle() {
        let mut row = raw(1, "1", "debit");
        row.date = Some("not a date".to_string());
        let result = validate_rows(vec![row]);
        assert!(result.is_ok());
    }

    #[test]
    fn every_invalid_row_is_reported_and_nothing_is_returned() {
        let mut bad_flag = raw(3, "1", "credit");
        bad_flag.is_expense = Some("maybe".to_string());
        let result = validate_rows(vec![
            raw(1, "-4.00", "debit"),
            raw(2, "12", "refund"),
            bad_flag,
            raw(4, "3", "debit"),
        ]);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "records_validation_failed");
            let data = error.data.unwrap_or_default();
            assert_eq!(data["summary"]["rows_read"], 4);
            assert_eq!(data["summary"]["rows_valid"], 1);
            assert_eq!(data["summary"]["rows_invalid"], 3);
            let codes = data["issues"]
                .as_array()
                .map(|issues| {
                    issues
                        .iter()
                        .filter_map(|issue| issue["code"].as_str().map(str::to_string))
                        .collect::<Vec<String>>()
                })
                .unwrap_or_default();
            assert_eq!(codes, vec!["negative_amount", "invalid_type", "invalid_flag"]);
        }
    }

    #[test]
    fn amounts_accept_plain_and_scientific_notation() {
        assert_eq!(parse_amount(" 75.00 "), Some(Decimal::new(7500, 2)));
        assert_eq!(parse_amount("1e2"), Some(Decimal::new(100, 0)));
        assert_eq!(parse_amount("seventy"), None);
    }
}
