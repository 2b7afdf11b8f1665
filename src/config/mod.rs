//! Engine configuration and constants.
//!
//! This module provides:
//! - Default values (TTL, batch cap, DMARC defaults, placeholders)
//! - Option types shared by the library and the CLI
//! - The library `Config` passed explicitly into the engine

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, DomainInputPolicy, ExportFormat, LogFormat, LogLevel};
