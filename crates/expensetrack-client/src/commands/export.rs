use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::commands::common::load;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::export::{export_to_string, write_csv};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct ExportRunOptions<'a> {
    pub records: Option<String>,
    pub output: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(records: Option<&str>, output: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ExportRunOptions {
        records: records.map(std::string::ToString::to_string),
        output: output.map(std::string::ToString::to_string),
        home_override: None,
    })
}

/// Without `output` the CSV text travels inside the envelope so the CLI can
/// print it as-is.
#[doc(hidden)]
pub fn run_with_options(options: ExportRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let loaded = load(options.records.as_deref(), options.home_override)?;
    let rows_written = loaded.records.len() as i64;

    let (output_path, csv) = match options.output {
        Some(output) => {
            let file = File::create(&output)
                .map_err(|error| ClientError::export_failed(&output, &error.to_string()))?;
            write_csv(&loaded.records, BufWriter::new(file))
                .map_err(|error| ClientError::export_failed(&output, &error.message))?;
            tracing::info!(path = %output, rows = rows_written, "wrote csv export");
            (Some(output), None)
        }
        None => (None, Some(export_to_string(&loaded.records)?)),
    };

    success(
        "export",
        ExportData {
            rows_written,
            output_path,
            csv,
            source: loaded.source,
        },
    )
}
