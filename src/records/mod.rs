//! DNS record model and synthesis.
//!
//! - `types`: the `DnsRecord` output unit and `RecordType`
//! - `synth`: builds the ordered record list for one domain

mod synth;
mod types;

// Re-export public API
pub use synth::{synthesize, DkimOverrides, SynthesisOptions};
pub use types::{DnsRecord, RecordType};
