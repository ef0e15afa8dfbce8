//! Turning the new/edit transaction form into a record ready to be written.
//!
//! This is where `is_expense` and `is_transfer` get derived from the category
//! id; the aggregator only ever reads the stored flags.

use rust_decimal::Decimal;

use crate::aggregate::date::{format_created_at, parse_created_at};
use crate::contracts::types::EntryIssue;
use crate::records::validate::parse_amount;
use crate::records::{TransactionRecord, TransactionType};
use crate::{ClientError, ClientResult};

pub const TRANSFER_CATEGORY_ID: i64 = 9;
/// Categories that never count toward spending: transfers and income.
pub const NON_EXPENSE_CATEGORY_IDS: [i64; 3] = [TRANSFER_CATEGORY_ID, 7, 701];

pub fn is_transfer_category(category_id: i64) -> bool {
    category_id == TRANSFER_CATEGORY_ID
}

pub fn is_expense_category(category_id: i64) -> bool {
    !NON_EXPENSE_CATEGORY_IDS.contains(&category_id)
}

/// Raw form fields. `amount` stays text until validated, as typed by the user.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub id: Option<String>,
    pub created_at: String,
    pub institution: String,
    pub account: String,
    pub merchant: String,
    pub amount: String,
    pub transaction_type: TransactionType,
    pub category_id: Option<i64>,
    pub category: String,
}

impl TransactionDraft {
    /// Validates a brand new entry and assigns it a fresh id. New entries start
    /// out pending and unedited.
    pub fn into_new_record(self) -> ClientResult<TransactionRecord> {
        let mut issues = Vec::new();
        let fields = self.validate_fields(&mut issues);
        let Some((amount, category_id, created_at)) = fields else {
            return Err(ClientError::entry_validation_failed(issues));
        };

        let id = ulid::Ulid::new().to_string().to_lowercase();
        tracing::debug!(id = %id, "validated new transaction entry");
        Ok(self.into_record(id, created_at, amount, category_id, true, false))
    }

    /// Validates an edit of an existing record. Edited entries are no longer
    /// pending and carry the edited flag.
    pub fn into_edited_record(self) -> ClientResult<TransactionRecord> {
        let mut issues = Vec::new();
        let id = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase);
        if id.is_none() {
            issues.push(entry_issue(
                "id",
                "missing_transaction_id",
                "An existing transaction id is required to save an edit.",
            ));
        }
        let fields = self.validate_fields(&mut issues);

        let (Some(id), Some((amount, category_id, created_at))) = (id, fields) else {
            return Err(ClientError::entry_validation_failed(issues));
        };
        tracing::debug!(id = %id, "validated transaction edit");
        Ok(self.into_record(id, created_at, amount, category_id, false, true))
    }

    fn validate_fields(&self, issues: &mut Vec<EntryIssue>) -> Option<(Decimal, i64, String)> {
        let amount = match parse_amount(&self.amount) {
            Some(value) if value >= Decimal::ZERO => Some(value),
            Some(_) => {
                issues.push(entry_issue(
                    "amount",
                    "negative_amount",
                    "Amount must not be negative; choose debit or credit instead.",
                ));
                None
            }
            None => {
                issues.push(entry_issue("amount", "invalid_amount", "Invalid amount."));
                None
            }
        };

        if self.category_id.is_none() {
            issues.push(entry_issue(
                "category_id",
                "missing_category_id",
                "Missing category ID.",
            ));
        }

        let created_at = parse_created_at(&self.created_at).map(|date| format_created_at(&date));
        if created_at.is_none() {
            issues.push(entry_issue(
                "date",
                "invalid_date",
                "Date must use MM/DD/YYYY format with a real calendar date.",
            ));
        }

        Some((amount?, self.category_id?, created_at?))
    }

    fn into_record(
        self,
        id: String,
        created_at: String,
        amount: Decimal,
        category_id: i64,
        is_pending: bool,
        is_edited: bool,
    ) -> TransactionRecord {
        TransactionRecord {
            id,
            created_at,
            institution: self.institution,
            account: self.account,
            merchant: self.merchant,
            amount,
            transaction_type: self.transaction_type,
            category_id,
            category: self.category,
            is_pending,
            is_transfer: is_transfer_category(category_id),
            is_expense: is_expense_category(category_id),
            is_edited,
        }
    }
}

fn entry_issue(field: &str, code: &str, description: &str) -> EntryIssue {
    EntryIssue {
        field: field.to_string(),
        code: code.to_string(),
        description: description.to_string(),
    }
}
