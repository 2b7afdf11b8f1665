//! Text report export.
//!
//! Markdown-like layout: a title, one `#` section per domain, one `##`
//! sub-section per record group, and one labeled block per record.

use std::fmt::Write as _;

use crate::batch::BatchResult;
use crate::config::EXPORT_TOOL_NAME;
use crate::records::DnsRecord;

use super::preview::group_for_preview;
use super::types::ExportMeta;

fn write_record_block(out: &mut String, record: &DnsRecord) {
    let _ = writeln!(out, "Host: {}", record.name());
    let _ = writeln!(out, "Type: {}", record.record_type());
    if let Some(priority) = record.priority() {
        let _ = writeln!(out, "Priority: {priority}");
    }
    let _ = writeln!(out, "Value: {}", record.value());
    let _ = writeln!(out, "TTL: {}", record.ttl());
    let _ = writeln!(out, "Description: {}", record.description());
    out.push('\n');
}

/// Renders the full text report.
pub fn export_text(result: &BatchResult, meta: &ExportMeta) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} - {}", meta.app_name, EXPORT_TOOL_NAME);
    let _ = writeln!(out, "Generated: {}", meta.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "Provider: {}", result.provider_name);
    let _ = writeln!(
        out,
        "Domains: {} accepted, {} rejected",
        result.accepted.len(),
        result.rejected.len()
    );
    out.push('\n');

    for domain_result in &result.accepted {
        let _ = writeln!(out, "# {}", domain_result.domain);
        out.push('\n');

        for group in group_for_preview(domain_result) {
            if group.records.is_empty() {
                continue;
            }
            let _ = writeln!(out, "## {}", group.bucket.heading());
            out.push('\n');
            for record in group.records {
                write_record_block(&mut out, record);
            }
        }
    }

    if !result.rejected.is_empty() {
        let _ = writeln!(out, "# Rejected Inputs");
        out.push('\n');
        for rejected in &result.rejected {
            let _ = writeln!(out, "- {}: {}", rejected.raw_input, rejected.reason);
        }
    }

    out
}
