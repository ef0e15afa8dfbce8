use std::path::Path;

use crate::ClientResult;
use crate::aggregate::filter;
use crate::commands::common::{load, transaction_rows};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SearchData;

#[derive(Debug, Default)]
pub struct SearchRunOptions<'a> {
    pub records: Option<String>,
    pub query: String,
    pub home_override: Option<&'a Path>,
}

pub fn run(records: Option<&str>, query: &str) -> ClientResult<SuccessEnvelope> {
    run_with_options(SearchRunOptions {
        records: records.map(std::string::ToString::to_string),
        query: query.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SearchRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let loaded = load(options.records.as_deref(), options.home_override)?;
    let matches = filter(&loaded.records, &options.query);

    success(
        "search",
        SearchData {
            query: options.query,
            match_count: matches.len() as i64,
            rows: transaction_rows(&matches),
            source: loaded.source,
        },
    )
}
