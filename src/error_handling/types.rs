//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A single rejected piece of user input.
///
/// Always recoverable. The batch orchestrator turns domain errors into
/// rejected entries, and the policy builder collects every policy error
/// before returning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Domain is empty")]
    EmptyDomain,

    #[error("'{input}' is not a valid domain: {reason}")]
    InvalidDomain { input: String, reason: String },

    #[error("Domain is {0} characters long (maximum 253)")]
    DomainTooLong(usize),

    #[error("Label '{0}' is longer than 63 characters")]
    LabelTooLong(String),

    #[error("{field} '{value}' is not a valid email address")]
    InvalidEmail { field: &'static str, value: String },

    #[error("Percentage {0} is outside 1-100")]
    PercentageOutOfRange(u16),

    #[error("Reporting interval {0} must be a positive number of seconds")]
    InvalidReportingInterval(u32),

    #[error("Unknown failure reporting option '{0}' (expected 0, 1, d or s)")]
    UnknownFailureOption(String),

    #[error("Unknown DMARC policy '{0}' (expected none, quarantine or reject)")]
    UnknownPolicy(String),

    #[error("Unknown alignment mode '{0}' (expected relaxed or strict)")]
    UnknownAlignment(String),
}

/// Failures that refuse the whole generate request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The caller asked for a provider the catalog does not have.
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),

    /// DMARC options failed validation; every problem is listed.
    #[error("Invalid DMARC options: {}", join_errors(.0))]
    InvalidPolicy(Vec<ValidationError>),

    #[error("Batch contains {count} domains (maximum {max})")]
    BatchTooLarge { count: usize, max: usize },

    #[error("No domains were provided")]
    NoDomains,
}

/// Error types for provider catalog construction and loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider id '{0}' appears more than once")]
    DuplicateProvider(String),

    #[error("Provider '{0}' has no MX records")]
    EmptyMx(String),

    #[error("Provider '{provider}' additional record '{name}': {reason}")]
    InvalidAdditionalRecord {
        provider: String,
        name: String,
        reason: &'static str,
    },
}

/// Error types for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_policy_lists_every_error() {
        let err = GenerateError::InvalidPolicy(vec![
            ValidationError::PercentageOutOfRange(0),
            ValidationError::InvalidEmail {
                field: "aggregate report address",
                value: "nope".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("Percentage 0 is outside 1-100"));
        assert!(msg.contains("aggregate report address 'nope'"));
    }

    #[test]
    fn test_batch_too_large_message() {
        let err = GenerateError::BatchTooLarge { count: 51, max: 50 };
        assert_eq!(err.to_string(), "Batch contains 51 domains (maximum 50)");
    }

    #[test]
    fn test_validation_error_display_is_non_empty() {
        let errors = [
            ValidationError::EmptyDomain,
            ValidationError::DomainTooLong(300),
            ValidationError::LabelTooLong("a".repeat(64)),
            ValidationError::InvalidReportingInterval(0),
            ValidationError::UnknownFailureOption("x".to_string()),
            ValidationError::UnknownPolicy("drop".to_string()),
            ValidationError::UnknownAlignment("loose".to_string()),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
