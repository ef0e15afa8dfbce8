//! Transaction records as supplied by the hosted database, the loader that
//! reads an exported snapshot of them from disk, and the store that writes
//! entries back.

pub(crate) mod parse;
pub(crate) mod source;
pub mod store;
pub(crate) mod validate;

use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ClientResult;
use crate::aggregate::amount::with_cent_scale;
use crate::aggregate::date::parse_created_at;
use crate::contracts::types::TransactionRow;

/// Number of rows shown in the "recent transactions" panel.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debit" => Some(Self::Debit),
            "credit" => Some(Self::Credit),
            _ => None,
        }
    }
}

/// One transaction. `created_at` stays in its stored `MM/DD/YYYY` form and is
/// only parsed on demand, so a malformed date never prevents loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: String,
    pub created_at: String,
    pub institution: String,
    pub account: String,
    pub merchant: String,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category_id: i64,
    pub category: String,
    pub is_pending: bool,
    pub is_transfer: bool,
    pub is_expense: bool,
    pub is_edited: bool,
}

impl TransactionRecord {
    /// Positive for credits, negative for debits.
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        parse_created_at(&self.created_at)
    }

    pub fn to_row(&self) -> TransactionRow {
        TransactionRow {
            id: self.id.clone(),
            date: self.created_at.clone(),
            institution: self.institution.clone(),
            account: self.account.clone(),
            merchant: self.merchant.clone(),
            amount: with_cent_scale(self.amount),
            transaction_type: self.transaction_type.as_str().to_string(),
            category_id: self.category_id,
            category: self.category.clone(),
            is_pending: self.is_pending,
            is_transfer: self.is_transfer,
            is_expense: self.is_expense,
            is_edited: self.is_edited,
        }
    }
}

/// Reads, validates, and orders the records at `path` (`-` reads stdin).
pub fn load_records(path: &Path) -> ClientResult<Vec<TransactionRecord>> {
    let content = source::read_source(path)?;
    let mut records = parse_records(&content)?;
    sort_newest_first(&mut records);
    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        "loaded transaction records"
    );
    Ok(records)
}

/// Parses a JSON array or CSV document into records, keeping source order.
pub fn parse_records(content: &str) -> ClientResult<Vec<TransactionRecord>> {
    let rows = parse::parse_source(content)?;
    validate::validate_rows(rows)
}

/// Most recent first. The sort is stable and records whose date does not parse
/// land at the end, as if they were the oldest.
pub fn sort_newest_first(records: &mut [TransactionRecord]) {
    records.sort_by_cached_key(|record| std::cmp::Reverse(record.created_on()));
}

pub fn recent(records: &[TransactionRecord], limit: usize) -> &[TransactionRecord] {
    &records[..limit.min(records.len())]
}
