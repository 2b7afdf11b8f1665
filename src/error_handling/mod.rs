//! Error handling.
//!
//! Errors are split by how far they reach:
//! - **Validation errors**: bad user input, carried back as data
//! - **Generate errors**: the whole request is refused
//! - **Catalog, export and initialization errors**: setup and output failures

mod types;

// Re-export public API
pub use types::{CatalogError, ExportError, GenerateError, InitializationError, ValidationError};
