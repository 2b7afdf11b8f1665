//! Batch request and result types.

use serde::{Deserialize, Serialize};

use crate::domain::Hostname;
use crate::policy::DmarcOptions;
use crate::records::{DkimOverrides, DnsRecord};

/// One "generate" action as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Raw domain strings, 1 to 50 after de-duplication
    pub domains: Vec<String>,
    /// Must match a catalog key
    pub provider_id: String,
    pub dmarc: DmarcOptions,
    #[serde(default)]
    pub dkim_overrides: DkimOverrides,
    #[serde(default)]
    pub verification_token: Option<String>,
}

/// One validated domain and its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    pub domain: Hostname,
    pub records: Vec<DnsRecord>,
}

/// An input that failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedInput {
    pub raw_input: String,
    pub reason: String,
}

/// Output of a batch run.
///
/// Every de-duplicated input lands in exactly one of `accepted` or `rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub provider_id: String,
    pub provider_name: String,
    pub accepted: Vec<DomainResult>,
    pub rejected: Vec<RejectedInput>,
}

impl BatchResult {
    /// Number of inputs processed after de-duplication.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Total records across all accepted domains.
    pub fn record_count(&self) -> usize {
        self.accepted.iter().map(|result| result.records.len()).sum()
    }
}
