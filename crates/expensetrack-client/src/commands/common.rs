use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ClientResult;
use crate::aggregate::amount::to_cents;
use crate::aggregate::date::parse_date_argument;
use crate::aggregate::{Clock, DailyExpensePoint, SystemClock};
use crate::contracts::types::{ChartPoint, RecordsSource, TransactionRow};
use crate::records::{TransactionRecord, load_records};
use crate::state::resolve_records_path;

#[derive(Debug, Clone)]
pub(crate) struct LoadedRecords {
    pub(crate) records: Vec<TransactionRecord>,
    pub(crate) source: RecordsSource,
}

pub(crate) fn load(
    records_override: Option<&str>,
    home_override: Option<&Path>,
) -> ClientResult<LoadedRecords> {
    let path = resolve_records_path(records_override, home_override)?;
    let records = load_records(&path)?;
    Ok(LoadedRecords {
        source: RecordsSource {
            path: path.display().to_string(),
            rows_loaded: records.len() as i64,
        },
        records,
    })
}

/// `--today` when given, otherwise the local date.
pub(crate) fn resolve_today(today: Option<&str>, command: &str) -> ClientResult<NaiveDate> {
    match today {
        Some(value) => parse_date_argument(value, "today", command),
        None => Ok(SystemClock.today()),
    }
}

pub(crate) fn transaction_rows(records: &[TransactionRecord]) -> Vec<TransactionRow> {
    records.iter().map(TransactionRecord::to_row).collect()
}

pub(crate) fn chart_points(points: &[DailyExpensePoint]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|point| ChartPoint {
            date: point.label.clone(),
            cumulative_total: to_cents(point.cumulative_total),
        })
        .collect()
}

/// Last value of the running series, or zero when the series is empty.
pub(crate) fn month_to_date_total(points: &[DailyExpensePoint]) -> Decimal {
    points
        .last()
        .map(|point| to_cents(point.cumulative_total))
        .unwrap_or_else(|| to_cents(Decimal::ZERO))
}
