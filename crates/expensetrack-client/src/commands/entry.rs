use std::path::Path;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::EntryData;
use crate::entry::TransactionDraft;
use crate::records::TransactionRecord;
use crate::records::store::{load_for_update, save_records};
use crate::state::resolve_records_path;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub enum EntryAction {
    Create(TransactionDraft),
    Edit(TransactionDraft),
    Delete { id: String },
}

impl EntryAction {
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Edit(_) => "edit",
            Self::Delete { .. } => "delete",
        }
    }

    const fn command(&self) -> &'static str {
        match self {
            Self::Create(_) => "entry create",
            Self::Edit(_) => "entry edit",
            Self::Delete { .. } => "entry delete",
        }
    }
}

#[derive(Debug)]
pub struct EntryRunOptions<'a> {
    pub records: Option<String>,
    pub action: EntryAction,
    pub home_override: Option<&'a Path>,
}

pub fn run(records: Option<&str>, action: EntryAction) -> ClientResult<SuccessEnvelope> {
    run_with_options(EntryRunOptions {
        records: records.map(std::string::ToString::to_string),
        action,
        home_override: None,
    })
}

/// Applies the entry to the records file and writes it back. Draft validation
/// runs before the file is touched.
#[doc(hidden)]
pub fn run_with_options(options: EntryRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let command = options.action.command();
    let mode = options.action.mode();
    let path = resolve_records_path(options.records.as_deref(), options.home_override)?;

    let (record, rows_stored) = match options.action {
        EntryAction::Create(draft) => {
            let record = draft.into_new_record()?;
            let mut stored = load_for_update(&path)?;
            stored.records.push(record.clone());
            save_records(&path, &stored.records, stored.format)?;
            (record, stored.records.len())
        }
        EntryAction::Edit(draft) => {
            let record = draft.into_edited_record()?;
            let mut stored = load_for_update(&path)?;
            let slot = find_by_id(&stored.records, &record.id)
                .ok_or_else(|| ClientError::transaction_not_found(&record.id))?;
            stored.records[slot] = record.clone();
            save_records(&path, &stored.records, stored.format)?;
            (record, stored.records.len())
        }
        EntryAction::Delete { id } => {
            let id = id.trim().to_lowercase();
            let mut stored = load_for_update(&path)?;
            let slot = find_by_id(&stored.records, &id)
                .ok_or_else(|| ClientError::transaction_not_found(&id))?;
            let record = stored.records.remove(slot);
            save_records(&path, &stored.records, stored.format)?;
            (record, stored.records.len())
        }
    };
    tracing::info!(command, id = %record.id, rows = rows_stored, "applied transaction entry");

    success(
        command,
        EntryData {
            mode: mode.to_string(),
            record: record.to_row(),
            records_path: path.display().to_string(),
            rows_stored: rows_stored as i64,
        },
    )
}

/// Ids written by other clients may be uppercase; entry ids are lowercased.
fn find_by_id(records: &[TransactionRecord], id: &str) -> Option<usize> {
    records
        .iter()
        .position(|record| record.id.to_lowercase() == id)
}
