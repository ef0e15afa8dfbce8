use std::path::Path;

use crate::ClientResult;
use crate::aggregate::date::{format_created_at, month_start};
use crate::aggregate::{FixedClock, TransactionAggregator};
use crate::commands::common::{chart_points, load, month_to_date_total, resolve_today};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ChartData;

#[derive(Debug, Default)]
pub struct ChartRunOptions<'a> {
    pub records: Option<String>,
    pub today: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(records: Option<&str>, today: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ChartRunOptions {
        records: records.map(std::string::ToString::to_string),
        today: today.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ChartRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let today = resolve_today(options.today.as_deref(), "chart")?;
    let loaded = load(options.records.as_deref(), options.home_override)?;
    let aggregator = TransactionAggregator::new(FixedClock(today));
    let points = aggregator.accumulate_daily_expense(&loaded.records);

    success(
        "chart",
        ChartData {
            today: format_created_at(&today),
            month_start: month_start(today)
                .map(|date| format_created_at(&date))
                .unwrap_or_default(),
            month_to_date_total: month_to_date_total(&points),
            points: chart_points(&points),
            source: loaded.source,
        },
    )
}
