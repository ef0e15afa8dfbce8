use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub institution: String,
    pub account: String,
    pub merchant: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category_id: i64,
    pub category: String,
    pub is_pending: bool,
    pub is_transfer: bool,
    pub is_expense: bool,
    pub is_edited: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordsSource {
    pub path: String,
    pub rows_loaded: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGroupRow {
    pub month: String,
    pub transaction_count: i64,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthsData {
    pub query: String,
    pub months: Vec<MonthGroupRow>,
    pub source: RecordsSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub cumulative_total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub today: String,
    pub month_start: String,
    pub month_to_date_total: Decimal,
    pub points: Vec<ChartPoint>,
    pub source: RecordsSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchData {
    pub query: String,
    pub match_count: i64,
    pub rows: Vec<TransactionRow>,
    pub source: RecordsSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewData {
    pub today: String,
    pub month_to_date_total: Decimal,
    pub points: Vec<ChartPoint>,
    pub recent: Vec<TransactionRow>,
    pub source: RecordsSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub rows_written: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
    pub source: RecordsSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryData {
    pub mode: String,
    pub record: TransactionRow,
    pub records_path: String,
    pub rows_stored: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordsSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecordIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryIssue {
    pub field: String,
    pub code: String,
    pub description: String,
}
