use indexmap::IndexMap;

use crate::aggregate::date::month_label;
use crate::aggregate::filter::filter;
use crate::records::TransactionRecord;

/// Month label to records, iterated in first-seen order.
pub type MonthGroups = IndexMap<String, Vec<TransactionRecord>>;

/// Filters by `search_query`, then buckets the matches by month label. Buckets
/// keep the order in which each month first appears in the input; callers that
/// want chronological buckets pass records already sorted by date.
pub fn group_by_month(transactions: &[TransactionRecord], search_query: &str) -> MonthGroups {
    let mut groups = MonthGroups::new();
    if transactions.is_empty() {
        return groups;
    }

    for record in filter(transactions, search_query) {
        let Some(created_on) = record.created_on() else {
            tracing::warn!(
                id = %record.id,
                created_at = %record.created_at,
                "dropping record with unparseable date from month groups"
            );
            continue;
        };
        groups
            .entry(month_label(&created_on))
            .or_default()
            .push(record);
    }

    groups
}
