//! Application initialization.
//!
//! The engine itself needs no setup; only the binary installs a logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
