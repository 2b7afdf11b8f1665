//! Preview grouping.
//!
//! Classifies records into display buckets. Records are borrowed, never
//! modified.

use std::fmt::Write as _;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::batch::{BatchResult, DomainResult};
use crate::records::{DnsRecord, RecordType};

/// Display bucket for a record. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum PreviewBucket {
    Mx,
    Spf,
    Dmarc,
    Dkim,
    Other,
}

impl PreviewBucket {
    /// Section heading used by the text report and the preview.
    pub fn heading(self) -> &'static str {
        match self {
            PreviewBucket::Mx => "MX Records",
            PreviewBucket::Spf => "SPF Record",
            PreviewBucket::Dmarc => "DMARC Record",
            PreviewBucket::Dkim => "DKIM Records",
            PreviewBucket::Other => "Other Records",
        }
    }
}

/// Records of one bucket, in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewGroup<'a> {
    pub bucket: PreviewBucket,
    pub records: Vec<&'a DnsRecord>,
}

/// Decides which bucket a record belongs to from its type, name, value and
/// description.
pub fn classify(record: &DnsRecord) -> PreviewBucket {
    if record.record_type() == RecordType::Mx {
        return PreviewBucket::Mx;
    }
    if record.record_type() != RecordType::Txt {
        return PreviewBucket::Other;
    }

    let name = record.name();
    let value = record.value();
    if name == "_dmarc" || name.starts_with("_dmarc.") || value.starts_with("v=DMARC1") {
        PreviewBucket::Dmarc
    } else if value.starts_with("v=spf1") {
        PreviewBucket::Spf
    } else if name.ends_with("._domainkey") || record.description().starts_with("DKIM") {
        PreviewBucket::Dkim
    } else {
        PreviewBucket::Other
    }
}

/// Groups one domain's records into every bucket, empty ones included.
pub fn group_for_preview(result: &DomainResult) -> Vec<PreviewGroup<'_>> {
    PreviewBucket::iter()
        .map(|bucket| PreviewGroup {
            bucket,
            records: result
                .records
                .iter()
                .filter(|record| classify(record) == bucket)
                .collect(),
        })
        .collect()
}

/// Compact on-screen rendering: one line per record under each non-empty bucket.
pub fn render_preview(result: &BatchResult) -> String {
    let mut out = String::new();

    for domain_result in &result.accepted {
        let _ = writeln!(out, "{} ({})", domain_result.domain, result.provider_name);
        for group in group_for_preview(domain_result) {
            if group.records.is_empty() {
                continue;
            }
            let _ = writeln!(out, "  [{}]", group.bucket);
            for record in group.records {
                let priority = record
                    .priority()
                    .map(|p| format!(" {p}"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "    {:<5} {:<24}{} {}",
                    record.record_type().to_string(),
                    record.name(),
                    priority,
                    record.value()
                );
            }
        }
        out.push('\n');
    }

    for rejected in &result.rejected {
        let _ = writeln!(out, "rejected: {} ({})", rejected.raw_input, rejected.reason);
    }

    out
}
