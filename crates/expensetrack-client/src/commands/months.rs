use std::path::Path;

use crate::ClientResult;
use crate::aggregate::{SystemClock, TransactionAggregator};
use crate::commands::common::{load, transaction_rows};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{MonthGroupRow, MonthsData};

#[derive(Debug, Default)]
pub struct MonthsRunOptions<'a> {
    pub records: Option<String>,
    pub query: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(records: Option<&str>, query: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(MonthsRunOptions {
        records: records.map(std::string::ToString::to_string),
        query: query.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: MonthsRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let loaded = load(options.records.as_deref(), options.home_override)?;
    let query = options.query.unwrap_or_default();
    let aggregator = TransactionAggregator::new(SystemClock);
    let groups = aggregator.group_by_month(&loaded.records, &query);

    let months = groups
        .iter()
        .map(|(month, rows)| MonthGroupRow {
            month: month.clone(),
            transaction_count: rows.len() as i64,
            transactions: transaction_rows(rows),
        })
        .collect::<Vec<MonthGroupRow>>();

    success(
        "months",
        MonthsData {
            query,
            months,
            source: loaded.source,
        },
    )
}
