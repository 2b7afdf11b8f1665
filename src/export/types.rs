//! Export metadata and filenames.

use chrono::NaiveDate;

use crate::config::{ExportFormat, EXPORT_TOOL_NAME};

/// Caller-provided context for artifacts. The date is passed in so exports
/// stay reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportMeta {
    pub app_name: String,
    pub date: NaiveDate,
}

/// Builds `<app> - DNS Record Generator - <YYYY-MM-DD>.<ext>`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mail_dns::config::ExportFormat;
/// use mail_dns::export::export_filename;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// assert_eq!(
///     export_filename("Acme", date, ExportFormat::Csv),
///     "Acme - DNS Record Generator - 2026-03-09.csv"
/// );
/// ```
pub fn export_filename(app_name: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{} - {} - {}.{}",
        app_name,
        EXPORT_TOOL_NAME,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
