use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::aggregate::amount::round_to_cents;
use crate::aggregate::date::{format_created_at, month_start};
use crate::records::TransactionRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyExpensePoint {
    pub date: NaiveDate,
    pub label: String,
    pub cumulative_total: Decimal,
}

/// Running month-to-date spending, one point per day from the first of
/// `today`'s month up to but excluding `today`.
///
/// Each day adds the negated signed amounts of that day's expense records, so
/// debits raise the total and credits lower it. The running sum is rounded to
/// cents after every day. Records with unparseable dates are skipped.
pub fn accumulate_daily_expense(
    transactions: &[TransactionRecord],
    today: NaiveDate,
) -> Vec<DailyExpensePoint> {
    if transactions.is_empty() {
        return Vec::new();
    }
    let Some(first_day) = month_start(today) else {
        return Vec::new();
    };
    if today <= first_day {
        return Vec::new();
    }

    let daily_totals = daily_expense_totals(transactions, first_day, today);

    let mut sum = Decimal::ZERO;
    let mut points = Vec::new();
    for day in first_day.iter_days().take_while(|day| *day < today) {
        if let Some(daily_total) = daily_totals.get(&day) {
            sum = add_or_saturate(sum, *daily_total, day);
        }
        sum = round_to_cents(sum);
        points.push(DailyExpensePoint {
            date: day,
            label: format_created_at(&day),
            cumulative_total: sum,
        });
    }

    tracing::debug!(
        today = %today,
        days = points.len(),
        total = %sum,
        "accumulated daily expenses"
    );
    points
}

fn daily_expense_totals(
    transactions: &[TransactionRecord],
    first_day: NaiveDate,
    today: NaiveDate,
) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in transactions.iter().filter(|record| record.is_expense) {
        let Some(created_on) = record.created_on() else {
            tracing::warn!(
                id = %record.id,
                created_at = %record.created_at,
                "skipping expense with unparseable date"
            );
            continue;
        };
        if created_on < first_day || created_on >= today {
            continue;
        }
        let total = totals.entry(created_on).or_insert(Decimal::ZERO);
        *total = add_or_saturate(*total, -record.signed_amount(), created_on);
    }
    totals
}

/// Amounts near `Decimal::MAX` overflow instead of wrapping; the total pins at
/// the bound in the direction of the addend.
fn add_or_saturate(total: Decimal, addend: Decimal, day: NaiveDate) -> Decimal {
    total.checked_add(addend).unwrap_or_else(|| {
        tracing::warn!(day = %day, "expense total overflowed, saturating");
        if addend.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}
