//! Provider profile types.
//!
//! Templates may contain `{domain}` (leftmost label), `{fqdn}` (full
//! hostname) and `{verification_token}` placeholders, which are filled in at
//! synthesis time.

use serde::{Deserialize, Serialize};

use crate::records::RecordType;

/// One MX target of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxTemplate {
    pub priority: u16,
    pub host_template: String,
}

impl MxTemplate {
    pub fn new(priority: u16, host_template: &str) -> Self {
        Self {
            priority,
            host_template: host_template.to_string(),
        }
    }
}

/// A provider record outside the MX/SPF/DMARC/DKIM blocks, such as an
/// autodiscover CNAME or a domain verification TXT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub value: String,
    /// Required for MX, forbidden otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    pub description: String,
}

impl AdditionalRecord {
    pub fn new(record_type: RecordType, name: &str, value: &str, description: &str) -> Self {
        Self {
            record_type,
            name: name.to_string(),
            value: value.to_string(),
            priority: None,
            description: description.to_string(),
        }
    }
}

/// Everything the synthesizer needs to know about one mail service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Stable key, e.g. `google-workspace`
    pub id: String,
    pub display_name: String,
    /// Never empty in a validated catalog. Storage order is not significant.
    pub mx_records: Vec<MxTemplate>,
    /// Complete SPF mechanism, e.g. `include:_spf.google.com`
    pub spf_include: String,
    /// Emitted as `{selector}._domainkey`, in this order
    pub dkim_selectors: Vec<String>,
    #[serde(default)]
    pub additional_records: Vec<AdditionalRecord>,
}

impl ProviderProfile {
    /// MX templates in ascending priority; ties keep declaration order.
    pub fn mx_by_priority(&self) -> Vec<&MxTemplate> {
        let mut mx: Vec<&MxTemplate> = self.mx_records.iter().collect();
        mx.sort_by_key(|template| template.priority);
        mx
    }
}
