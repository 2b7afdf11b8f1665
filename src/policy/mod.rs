//! Mail authentication policy builders.
//!
//! - `dmarc`: validates DMARC options and renders the `_dmarc` TXT value
//! - `spf`: renders the SPF TXT value
//! - `tags`: the shared ordered-tag formatter both are built on

mod dmarc;
mod spf;
mod tags;

// Re-export public API
pub use dmarc::{build, Alignment, DmarcDisposition, DmarcOptions, DmarcPolicy, FailureOption};
pub use spf::spf_value;
