use crate::aggregate::amount::format_amount;
use crate::aggregate::date::format_created_at;
use crate::records::TransactionRecord;

/// Case-insensitive substring search over the text fields, the reformatted
/// date, and the two-decimal amount. An empty query keeps every record.
pub fn filter(transactions: &[TransactionRecord], search_query: &str) -> Vec<TransactionRecord> {
    if search_query.is_empty() {
        return transactions.to_vec();
    }

    let needle = search_query.to_lowercase();
    let matches = transactions
        .iter()
        .filter(|record| matches_query(record, &needle))
        .cloned()
        .collect::<Vec<TransactionRecord>>();
    tracing::debug!(
        query = search_query,
        total = transactions.len(),
        matched = matches.len(),
        "filtered transactions"
    );
    matches
}

fn matches_query(record: &TransactionRecord, needle: &str) -> bool {
    let text_match = [
        &record.merchant,
        &record.category,
        &record.institution,
        &record.account,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle));
    if text_match {
        return true;
    }

    // An unparseable date simply cannot match; the other fields still can.
    let date_match = record
        .created_on()
        .is_some_and(|date| format_created_at(&date).to_lowercase().contains(needle));

    date_match || format_amount(record.amount).contains(needle)
}
