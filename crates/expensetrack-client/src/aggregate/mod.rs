//! Read-only views derived from a snapshot of transaction records: month
//! buckets for the list screen, a month-to-date spending series for the chart,
//! and free-text search. Nothing here mutates its input or performs I/O.

pub mod amount;
mod clock;
pub mod date;
mod filter;
mod group;
mod series;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::filter;
pub use group::{MonthGroups, group_by_month};
pub use series::{DailyExpensePoint, accumulate_daily_expense};

use crate::records::TransactionRecord;

/// Bundles the aggregation functions with the clock that decides "today".
#[derive(Debug, Clone, Default)]
pub struct TransactionAggregator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> TransactionAggregator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn group_by_month(
        &self,
        transactions: &[TransactionRecord],
        search_query: &str,
    ) -> MonthGroups {
        group_by_month(transactions, search_query)
    }

    pub fn accumulate_daily_expense(
        &self,
        transactions: &[TransactionRecord],
    ) -> Vec<DailyExpensePoint> {
        accumulate_daily_expense(transactions, self.clock.today())
    }

    pub fn filter(
        &self,
        transactions: &[TransactionRecord],
        search_query: &str,
    ) -> Vec<TransactionRecord> {
        filter(transactions, search_query)
    }
}
