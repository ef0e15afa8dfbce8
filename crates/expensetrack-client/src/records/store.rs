//! Reading the records file for an update and writing it back.
//!
//! The file keeps the format it was found in. A missing file is treated as an
//! empty JSON array so the first entry creates it.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::records::parse::{OPTIONAL_FIELDS, REQUIRED_FIELDS};
use crate::records::{TransactionRecord, parse_records};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsFormat {
    JsonArray,
    Csv,
}

impl RecordsFormat {
    fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('[') {
            Self::JsonArray
        } else {
            Self::Csv
        }
    }
}

/// Records in file order, plus the format to write them back in.
#[derive(Debug, Clone)]
pub struct StoredRecords {
    pub records: Vec<TransactionRecord>,
    pub format: RecordsFormat,
}

pub fn load_for_update(path: &Path) -> ClientResult<StoredRecords> {
    if path.as_os_str() == "-" {
        return Err(ClientError::invalid_argument(
            "Entries cannot be saved to stdin. Pass a records file path with `--records`.",
        ));
    }

    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "records file missing, starting empty");
            String::new()
        }
        Err(error) => {
            return Err(ClientError::records_unreadable(
                &path.display().to_string(),
                &error.to_string(),
            ));
        }
    };

    if body.trim().is_empty() {
        return Ok(StoredRecords {
            records: Vec::new(),
            format: RecordsFormat::JsonArray,
        });
    }

    Ok(StoredRecords {
        format: RecordsFormat::detect(&body),
        records: parse_records(&body)?,
    })
}

/// Writes next to the target and renames over it, so a failed write never
/// leaves a truncated records file behind.
pub fn save_records(
    path: &Path,
    records: &[TransactionRecord],
    format: RecordsFormat,
) -> ClientResult<()> {
    let body = match format {
        RecordsFormat::JsonArray => render_json(records)?,
        RecordsFormat::Csv => render_csv(records)?,
    };
    let write_failed = |error: io::Error| ClientError::records_write_failed(path, &error.to_string());

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }

    let staging = staging_path(path);
    fs::write(&staging, body).map_err(write_failed)?;
    fs::rename(&staging, path).map_err(write_failed)?;

    tracing::info!(path = %path.display(), rows = records.len(), "saved transaction records");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn render_json(records: &[TransactionRecord]) -> ClientResult<String> {
    let rows = records
        .iter()
        .map(TransactionRecord::to_row)
        .collect::<Vec<_>>();
    let mut body = serde_json::to_string_pretty(&rows).map_err(|error| {
        ClientError::internal_serialization(&format!("Could not encode records: {error}"))
    })?;
    body.push('\n');
    Ok(body)
}

fn render_csv(records: &[TransactionRecord]) -> ClientResult<String> {
    let encode_failed = |detail: String| {
        ClientError::internal_serialization(&format!("Could not encode records as CSV: {detail}"))
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    let headers = REQUIRED_FIELDS.iter().chain(OPTIONAL_FIELDS.iter());
    writer
        .write_record(headers)
        .map_err(|error| encode_failed(error.to_string()))?;

    for record in records {
        let row = record.to_row();
        writer
            .write_record([
                row.id,
                row.date,
                row.amount.to_string(),
                row.transaction_type,
                row.institution,
                row.account,
                row.merchant,
                row.category_id.to_string(),
                row.category,
                row.is_pending.to_string(),
                row.is_transfer.to_string(),
                row.is_expense.to_string(),
                row.is_edited.to_string(),
            ])
            .map_err(|error| encode_failed(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| encode_failed(error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| encode_failed(error.to_string()))
}
