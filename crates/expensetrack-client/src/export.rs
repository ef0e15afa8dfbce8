use std::io::Write;

use crate::aggregate::amount::format_amount;
use crate::records::TransactionRecord;
use crate::{ClientError, ClientResult};

pub const EXPORT_HEADERS: [&str; 10] = [
    "Created At",
    "Institution",
    "Account",
    "Merchant",
    "Amount",
    "Type",
    "Category",
    "Is Transfer",
    "Is Expense",
    "Is Edited",
];

/// Writes one CSV row per record, in the order given, after a header row.
pub fn write_csv<W: Write>(records: &[TransactionRecord], writer: W) -> ClientResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(EXPORT_HEADERS)
        .map_err(|error| ClientError::export_failed("csv", &error.to_string()))?;

    for record in records {
        let amount = format_amount(record.amount);
        csv_writer
            .write_record([
                record.created_at.as_str(),
                record.institution.as_str(),
                record.account.as_str(),
                record.merchant.as_str(),
                amount.as_str(),
                record.transaction_type.as_str(),
                record.category.as_str(),
                bool_cell(record.is_transfer),
                bool_cell(record.is_expense),
                bool_cell(record.is_edited),
            ])
            .map_err(|error| ClientError::export_failed("csv", &error.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|error| ClientError::export_failed("csv", &error.to_string()))
}

pub fn export_to_string(records: &[TransactionRecord]) -> ClientResult<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|error| ClientError::export_failed("csv", &error.to_string()))
}

fn bool_cell(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
