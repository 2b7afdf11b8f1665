//! Configuration types and CLI options.
//!
//! This module defines enums and structs used both by the library and by
//! command-line argument parsing.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_APP_NAME, DEFAULT_TTL, MAX_BATCH_DOMAINS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output artifact produced from a batch result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Human-readable text report, one section per domain
    Text,
    /// Flat CSV, one row per record
    Csv,
    /// Full batch result as pretty-printed JSON
    Json,
    /// Records grouped by purpose for on-screen display
    Preview,
}

impl ExportFormat {
    /// File extension used for downloadable artifacts.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Preview => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// How raw domain input is treated before validation.
///
/// `Strict` rejects anything that is not already a bare hostname, so pasted
/// URLs are reported back instead of being rewritten. `Lenient` strips a
/// scheme, path, port and leading `www.` first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainInputPolicy {
    #[default]
    Strict,
    Lenient,
}

/// Library configuration (no CLI dependencies).
///
/// Passed explicitly to [`crate::run`]; nothing in the engine reads global state.
///
/// # Examples
///
/// ```
/// use mail_dns::Config;
///
/// let config = Config {
///     ttl: 300,
///     ..Default::default()
/// };
/// assert_eq!(config.max_batch_domains, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application name used in export filenames
    pub app_name: String,

    /// TTL in seconds for every generated record
    pub ttl: u32,

    /// Maximum distinct domains per batch
    pub max_batch_domains: usize,

    /// Strict or lenient handling of pasted input
    pub domain_input: DomainInputPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            ttl: DEFAULT_TTL,
            max_batch_domains: MAX_BATCH_DOMAINS,
            domain_input: DomainInputPolicy::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Preview.extension(), "txt");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.app_name, "mail_dns");
        assert_eq!(config.ttl, 3600);
        assert_eq!(config.max_batch_domains, 50);
        assert_eq!(config.domain_input, DomainInputPolicy::Strict);
    }

    #[test]
    fn test_domain_input_policy_serde() {
        let policy: DomainInputPolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(policy, DomainInputPolicy::Lenient);
    }
}
