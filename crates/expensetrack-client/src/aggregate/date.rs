use chrono::{Datelike, NaiveDate};

use crate::{ClientError, ClientResult};

/// Stored and displayed form of transaction dates, e.g. `09/03/2024`.
pub const CREATED_AT_FORMAT: &str = "%m/%d/%Y";

pub fn parse_created_at(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CREATED_AT_FORMAT).ok()
}

pub fn format_created_at(date: &NaiveDate) -> String {
    date.format(CREATED_AT_FORMAT).to_string()
}

/// Long month name and four digit year, e.g. `September 2024`.
pub fn month_label(date: &NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

/// Parses a user supplied `MM/DD/YYYY` date, failing with an argument error.
pub fn parse_date_argument(value: &str, field_name: &str, command: &str) -> ClientResult<NaiveDate> {
    parse_created_at(value).ok_or_else(|| {
        ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use MM/DD/YYYY format with a real calendar date."),
            Some(command),
        )
    })
}
