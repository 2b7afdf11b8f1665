//! mail_dns library: DNS record generation for mail domains
//!
//! Given one or more domains, a mail provider profile and DMARC options, the
//! engine produces the MX, SPF, DMARC, DKIM and provider-specific records each
//! domain needs, and serializes them as a text report, CSV or JSON.
//!
//! The engine is pure: no DNS queries, no I/O, no clock. Everything it needs,
//! including the provider catalog and the export date, is passed in.
//!
//! # Example
//!
//! ```
//! use mail_dns::policy::{DmarcDisposition, DmarcOptions};
//! use mail_dns::{run, Config, GenerateRequest, ProviderCatalog};
//!
//! let request = GenerateRequest {
//!     domains: vec!["example.com".to_string()],
//!     provider_id: "google-workspace".to_string(),
//!     dmarc: DmarcOptions::new(DmarcDisposition::Quarantine, "d@example.com"),
//!     dkim_overrides: Default::default(),
//!     verification_token: None,
//! };
//!
//! let result = run(&request, &ProviderCatalog::builtin(), &Config::default()).unwrap();
//! let records = &result.accepted[0].records;
//! assert_eq!(records[0].value(), "aspmx.l.google.com");
//! ```

pub mod batch;
pub mod config;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod policy;
pub mod provider;
pub mod records;
mod utils;

// Re-export public API
pub use batch::{run, BatchResult, DomainResult, GenerateRequest, RejectedInput};
pub use config::{Config, DomainInputPolicy, ExportFormat, LogFormat, LogLevel};
pub use domain::Hostname;
pub use error_handling::{
    CatalogError, ExportError, GenerateError, InitializationError, ValidationError,
};
pub use provider::{ProviderCatalog, ProviderProfile};
pub use records::{DkimOverrides, DnsRecord, RecordType};
