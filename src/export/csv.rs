//! CSV export functionality.
//!
//! One header row, then one row per record across all accepted domains.
//! Commas in descriptions are replaced with semicolons. Fields are quoted
//! only when they must be; a value that needed quoting is logged because some
//! DNS import tools do not understand quoted fields.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use log::warn;

use crate::batch::BatchResult;
use crate::error_handling::ExportError;

/// Column order of the CSV artifact.
pub const CSV_HEADER: [&str; 7] = [
    "Domain",
    "Type",
    "Name",
    "Value",
    "Priority",
    "TTL",
    "Description",
];

/// Writes `result` as CSV.
///
/// # Returns
///
/// The number of data rows written (header excluded).
pub fn export_csv<W: Write>(result: &BatchResult, out: W) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;

    let mut record_count = 0;
    for domain_result in &result.accepted {
        let domain = domain_result.domain.as_str();
        for record in &domain_result.records {
            if record.value().contains([',', '"']) {
                warn!(
                    "{} {} record '{}' value contains a comma or quote and will be quoted in CSV",
                    domain,
                    record.record_type(),
                    record.name()
                );
            }

            let record_type = record.record_type().to_string();
            let priority = record
                .priority()
                .map(|p| p.to_string())
                .unwrap_or_default();
            let ttl = record.ttl().to_string();
            let description = record.description().replace(',', ";");
            writer.write_record([
                domain,
                record_type.as_str(),
                record.name(),
                record.value(),
                priority.as_str(),
                ttl.as_str(),
                description.as_str(),
            ])?;
            record_count += 1;
        }
    }

    writer.flush()?;
    Ok(record_count)
}
