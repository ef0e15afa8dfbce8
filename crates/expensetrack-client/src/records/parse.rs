use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{ClientError, ClientResult};

pub(crate) const REQUIRED_FIELDS: [&str; 4] = ["id", "date", "amount", "type"];

pub(crate) const OPTIONAL_FIELDS: [&str; 9] = [
    "institution",
    "account",
    "merchant",
    "category_id",
    "category",
    "is_pending",
    "is_transfer",
    "is_expense",
    "is_edited",
];

/// camelCase spellings used by the mobile client when it writes to the database.
const FIELD_ALIASES: [(&str, &str); 5] = [
    ("categoryId", "category_id"),
    ("isPending", "is_pending"),
    ("isTransfer", "is_transfer"),
    ("isExpense", "is_expense"),
    ("isEdited", "is_edited"),
];

#[derive(Debug, Clone, Default)]
pub(crate) struct RawRecord {
    pub(crate) row: i64,
    pub(crate) id: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) institution: Option<String>,
    pub(crate) account: Option<String>,
    pub(crate) merchant: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) transaction_type: Option<String>,
    pub(crate) category_id: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) is_pending: Option<String>,
    pub(crate) is_transfer: Option<String>,
    pub(crate) is_expense: Option<String>,
    pub(crate) is_edited: Option<String>,
}

impl RawRecord {
    fn from_lookup(row: i64, mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            row,
            id: lookup("id"),
            date: lookup("date"),
            institution: lookup("institution"),
            account: lookup("account"),
            merchant: lookup("merchant"),
            amount: lookup("amount"),
            transaction_type: lookup("type"),
            category_id: lookup("category_id"),
            category: lookup("category"),
            is_pending: lookup("is_pending"),
            is_transfer: lookup("is_transfer"),
            is_expense: lookup("is_expense"),
            is_edited: lookup("is_edited"),
        }
    }
}

pub(crate) fn parse_source(content: &str) -> ClientResult<Vec<RawRecord>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_records_format(
            "Records source is empty.",
            "empty",
        ));
    }

    if looks_like_ndjson(trimmed) {
        return Err(ClientError::invalid_records_format(
            "NDJSON is not supported. Provide a JSON array or CSV.",
            "ndjson",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::invalid_records_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(ClientError::invalid_records_format(
        "Unsupported records format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<Vec<RawRecord>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|_| {
        ClientError::invalid_records_format(
            "Invalid JSON input. Provide a valid JSON array.",
            "json_invalid",
        )
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(ClientError::invalid_records_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(ClientError::invalid_records_format(
                "JSON array entries must all be objects with transaction fields.",
                "json_non_object_entry",
            ));
        };

        rows.push(RawRecord::from_lookup((index as i64) + 1, |field| {
            read_json_field(object, field)
        }));
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> ClientResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            ClientError::invalid_records_format(
                "CSV header row is missing or unreadable.",
                "csv_invalid",
            )
        })?
        .iter()
        .map(|value| canonical_field_name(value.trim()).to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::records_schema_mismatch(
            REQUIRED_FIELDS.iter().map(|name| name.to_string()).collect(),
            OPTIONAL_FIELDS.iter().map(|name| name.to_string()).collect(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row.map_err(|_| {
            ClientError::invalid_records_format(
                "CSV rows are malformed or not UTF-8.",
                "csv_invalid",
            )
        })?;

        rows.push(RawRecord::from_lookup((row_index as i64) + 1, |field| {
            let index = index_by_name.get(field)?;
            record.get(*index).map(str::to_string)
        }));
    }

    Ok(rows)
}

fn read_json_field(object: &Map<String, Value>, field: &str) -> Option<String> {
    let value = object.get(field).or_else(|| {
        FIELD_ALIASES
            .iter()
            .find(|(_, canonical)| *canonical == field)
            .and_then(|(alias, _)| object.get(*alias))
    })?;

    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

fn canonical_field_name(header: &str) -> &str {
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == header)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(header)
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    let has_required = REQUIRED_FIELDS
        .iter()
        .all(|required| actual_headers.iter().any(|header| header == required));
    let all_known = actual_headers.iter().all(|header| {
        REQUIRED_FIELDS.contains(&header.as_str()) || OPTIONAL_FIELDS.contains(&header.as_str())
    });
    has_required && all_known
}

fn looks_like_ndjson(content: &str) -> bool {
    let lines = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<&str>>();
    if lines.len() < 2 {
        return false;
    }

    lines.iter().all(|line| {
        serde_json::from_str::<Value>(line.trim())
            .map(|value| value.is_object())
            .unwrap_or(false)
    })
}

fn looks_like_csv(content: &str) -> bool {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|first_line| first_line.contains(','))
}
