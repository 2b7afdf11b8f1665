//! Mail provider catalog.
//!
//! Each supported mail service is described by an immutable
//! [`ProviderProfile`]. Profiles live in a [`ProviderCatalog`] that callers
//! construct and pass into the engine, so tests can swap in fake providers.

mod builtin;
mod catalog;
mod profile;

// Re-export public API
pub use catalog::ProviderCatalog;
pub use profile::{AdditionalRecord, MxTemplate, ProviderProfile};
