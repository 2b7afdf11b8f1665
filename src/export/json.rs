//! JSON export.
//!
//! Serializes the complete batch result, including rejected inputs, for
//! programmatic consumers.

use crate::batch::BatchResult;
use crate::error_handling::ExportError;

/// Pretty-printed JSON of the whole batch result.
pub fn export_json(result: &BatchResult) -> Result<String, ExportError> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}
