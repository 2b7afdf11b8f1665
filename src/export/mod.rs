//! Export functionality for batch results.
//!
//! Pure functions over a [`BatchResult`]:
//! - text report (one section per domain)
//! - CSV (one row per record)
//! - JSON (the whole result)
//! - preview (records grouped by purpose for on-screen display)

mod csv;
mod json;
mod preview;
mod text;
mod types;

use std::io::Write;

use crate::batch::BatchResult;
use crate::config::ExportFormat;
use crate::error_handling::ExportError;

pub use self::csv::{export_csv, CSV_HEADER};
pub use json::export_json;
pub use preview::{classify, group_for_preview, render_preview, PreviewBucket, PreviewGroup};
pub use text::export_text;
pub use types::{export_filename, ExportMeta};

/// Writes `result` to `out` in the requested format and flushes it.
///
/// Returns the number of records written.
pub fn write_export<W: Write>(
    result: &BatchResult,
    format: ExportFormat,
    meta: &ExportMeta,
    mut out: W,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => {
            export_csv(result, &mut out)?;
        }
        ExportFormat::Text => out.write_all(export_text(result, meta).as_bytes())?,
        ExportFormat::Json => out.write_all(export_json(result)?.as_bytes())?,
        ExportFormat::Preview => out.write_all(render_preview(result).as_bytes())?,
    }
    // Buffered writers only report write failures on flush
    out.flush()?;
    Ok(result.record_count())
}
