// Shared test helpers for building requests and fake catalogs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use mail_dns::policy::{DmarcDisposition, DmarcOptions};
use mail_dns::provider::{AdditionalRecord, MxTemplate, ProviderProfile};
use mail_dns::{GenerateRequest, ProviderCatalog, RecordType};

/// Builds a request with quarantine policy and the given domains.
#[allow(dead_code)] // Used by other test files
pub fn request(provider_id: &str, domains: &[&str]) -> GenerateRequest {
    GenerateRequest {
        domains: domains.iter().map(|d| d.to_string()).collect(),
        provider_id: provider_id.to_string(),
        dmarc: DmarcOptions::new(DmarcDisposition::Quarantine, "d@example.com"),
        dkim_overrides: Default::default(),
        verification_token: None,
    }
}

/// A catalog holding a single test provider, `acme`.
#[allow(dead_code)] // Used by other test files
pub fn fake_catalog() -> ProviderCatalog {
    ProviderCatalog::new(vec![ProviderProfile {
        id: "acme".to_string(),
        display_name: "Acme Relay".to_string(),
        mx_records: vec![
            MxTemplate::new(30, "mx3.acme.test"),
            MxTemplate::new(10, "mx1.acme.test"),
            MxTemplate::new(20, "{domain}.mx2.acme.test"),
        ],
        spf_include: "include:spf.acme.test".to_string(),
        dkim_selectors: vec!["acme2".to_string(), "acme1".to_string(), "acme3".to_string()],
        additional_records: vec![AdditionalRecord::new(
            RecordType::Cname,
            "bounce",
            "bounce.acme.test",
            "Return path, required for bounces",
        )],
    }])
    .expect("Fake catalog should be valid")
}
