use std::path::Path;

use crate::ClientResult;
use crate::aggregate::date::format_created_at;
use crate::aggregate::{FixedClock, TransactionAggregator};
use crate::commands::common::{
    chart_points, load, month_to_date_total, resolve_today, transaction_rows,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::OverviewData;
use crate::records::{RECENT_LIMIT, recent};

#[derive(Debug, Default)]
pub struct OverviewRunOptions<'a> {
    pub records: Option<String>,
    pub today: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(records: Option<&str>, today: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(OverviewRunOptions {
        records: records.map(std::string::ToString::to_string),
        today: today.map(std::string::ToString::to_string),
        home_override: None,
    })
}

/// The home screen: month-to-date spending chart plus the latest records.
#[doc(hidden)]
pub fn run_with_options(options: OverviewRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let today = resolve_today(options.today.as_deref(), "overview")?;
    let loaded = load(options.records.as_deref(), options.home_override)?;
    let aggregator = TransactionAggregator::new(FixedClock(today));
    let points = aggregator.accumulate_daily_expense(&loaded.records);

    success(
        "overview",
        OverviewData {
            today: format_created_at(&today),
            month_to_date_total: month_to_date_total(&points),
            points: chart_points(&points),
            recent: transaction_rows(recent(&loaded.records, RECENT_LIMIT)),
            source: loaded.source,
        },
    )
}
