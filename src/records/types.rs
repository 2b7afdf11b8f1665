//! DNS record types.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// DNS resource record types the generator can emit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
}

impl RecordType {
    /// Only MX records carry a priority.
    pub fn has_priority(self) -> bool {
        self == RecordType::Mx
    }
}

/// One generated DNS resource record.
///
/// Fields are private so that the priority invariant holds: a record has a
/// priority if and only if it is an MX record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    record_type: RecordType,
    name: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
    ttl: u32,
    description: String,
}

impl DnsRecord {
    pub fn mx(name: &str, host: &str, priority: u16, ttl: u32, description: &str) -> Self {
        Self {
            record_type: RecordType::Mx,
            name: name.to_string(),
            value: host.to_string(),
            priority: Some(priority),
            ttl,
            description: description.to_string(),
        }
    }

    pub fn txt(name: &str, value: &str, ttl: u32, description: &str) -> Self {
        Self::without_priority(RecordType::Txt, name, value, ttl, description)
    }

    pub fn cname(name: &str, target: &str, ttl: u32, description: &str) -> Self {
        Self::without_priority(RecordType::Cname, name, target, ttl, description)
    }

    /// Builds a record of any type, returning `None` when `priority` does not
    /// match what `record_type` requires.
    pub fn with_type(
        record_type: RecordType,
        name: &str,
        value: &str,
        priority: Option<u16>,
        ttl: u32,
        description: &str,
    ) -> Option<Self> {
        match (record_type.has_priority(), priority) {
            (true, Some(priority)) => Some(Self::mx(name, value, priority, ttl, description)),
            (false, None) => Some(Self::without_priority(
                record_type,
                name,
                value,
                ttl,
                description,
            )),
            _ => None,
        }
    }

    fn without_priority(
        record_type: RecordType,
        name: &str,
        value: &str,
        ttl: u32,
        description: &str,
    ) -> Self {
        Self {
            record_type,
            name: name.to_string(),
            value: value.to_string(),
            priority: None,
            ttl,
            description: description.to_string(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Relative host label (`@` for the zone apex).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn priority(&self) -> Option<u16> {
        self.priority
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
