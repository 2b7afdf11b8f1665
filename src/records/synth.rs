//! Record synthesis for a single domain.
//!
//! Output order is always MX, SPF, DMARC, DKIM, then provider extras. Within
//! a block the provider's declared order is kept (MX sorted by priority).
//! The same inputs always produce the same records.

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::{
    DEFAULT_TTL, DKIM_PLACEHOLDER, DOMAIN_LABEL_PLACEHOLDER, FQDN_PLACEHOLDER,
    VERIFICATION_TOKEN_PLACEHOLDER, VERIFICATION_TOKEN_TEMPLATE,
};
use crate::domain::Hostname;
use crate::policy::{spf_value, DmarcPolicy};
use crate::provider::ProviderProfile;

use super::types::DnsRecord;

/// Caller-supplied DKIM public keys, keyed by selector.
///
/// Lookup only; record order comes from the provider's selector list.
pub type DkimOverrides = HashMap<String, String>;

/// Per-request knobs that are not part of the provider or the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub ttl: u32,
    /// Replaces `{verification_token}` in provider templates
    pub verification_token: Option<String>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            verification_token: None,
        }
    }
}

/// Values substituted into provider templates.
struct Placeholders<'a> {
    label: &'a str,
    fqdn: &'a str,
    token: &'a str,
}

impl Placeholders<'_> {
    fn render(&self, template: &str) -> String {
        template
            .replace(DOMAIN_LABEL_PLACEHOLDER, self.label)
            .replace(FQDN_PLACEHOLDER, self.fqdn)
            .replace(VERIFICATION_TOKEN_TEMPLATE, self.token)
    }
}

/// Builds the full ordered record set for one domain.
///
/// DKIM records take their value from `dkim_overrides` when a non-blank entry
/// exists for the selector, otherwise a placeholder asking for the key from
/// the provider console. Overrides for selectors the profile lacks are
/// ignored here; [`crate::batch::run`] reports them once per batch.
pub fn synthesize(
    domain: &Hostname,
    profile: &ProviderProfile,
    policy: &DmarcPolicy,
    dkim_overrides: &DkimOverrides,
    options: &SynthesisOptions,
) -> Vec<DnsRecord> {
    let ttl = options.ttl;
    let placeholders = Placeholders {
        label: domain.leftmost_label(),
        fqdn: domain.as_str(),
        token: options
            .verification_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .unwrap_or(VERIFICATION_TOKEN_PLACEHOLDER),
    };

    let mut records = Vec::with_capacity(
        profile.mx_records.len()
            + 2
            + profile.dkim_selectors.len()
            + profile.additional_records.len(),
    );

    for mx in profile.mx_by_priority() {
        records.push(DnsRecord::mx(
            "@",
            &placeholders.render(&mx.host_template),
            mx.priority,
            ttl,
            &format!(
                "{} mail server (priority {})",
                profile.display_name, mx.priority
            ),
        ));
    }

    records.push(DnsRecord::txt(
        "@",
        &spf_value(&[profile.spf_include.as_str()]),
        ttl,
        &format!("SPF: authorizes {} to send for {}", profile.display_name, domain),
    ));

    records.push(DnsRecord::txt(
        "_dmarc",
        &policy.record_value(),
        ttl,
        &format!("DMARC policy ({})", policy.policy),
    ));

    for selector in &profile.dkim_selectors {
        let supplied = dkim_overrides
            .get(selector)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty());
        let description = match supplied {
            Some(_) => format!("DKIM public key for selector '{selector}'"),
            None => format!(
                "DKIM public key for selector '{selector}' (copy from the {} console)",
                profile.display_name
            ),
        };
        records.push(DnsRecord::txt(
            &format!("{selector}._domainkey"),
            supplied.unwrap_or(DKIM_PLACEHOLDER),
            ttl,
            &description,
        ));
    }

    for extra in &profile.additional_records {
        let record = DnsRecord::with_type(
            extra.record_type,
            &placeholders.render(&extra.name),
            &placeholders.render(&extra.value),
            extra.priority,
            ttl,
            &extra.description,
        );
        match record {
            Some(record) => records.push(record),
            None => warn!(
                "Skipping {} record '{}' from {}: priority does not match record type",
                extra.record_type, extra.name, profile.id
            ),
        }
    }

    debug!(
        "Synthesized {} records for {} ({})",
        records.len(),
        domain,
        profile.id
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate;
    use crate::policy::{build, DmarcDisposition, DmarcOptions};
    use crate::provider::{AdditionalRecord, MxTemplate, ProviderCatalog};
    use crate::records::RecordType;

    fn policy() -> DmarcPolicy {
        build(&DmarcOptions::new(
            DmarcDisposition::Quarantine,
            "d@example.com",
        ))
        .unwrap()
    }

    fn fake_profile() -> ProviderProfile {
        ProviderProfile {
            id: "fake".to_string(),
            display_name: "Fake Mail".to_string(),
            mx_records: vec![
                MxTemplate::new(20, "backup.{domain}.fake.test"),
                MxTemplate::new(10, "primary.fake.test"),
            ],
            spf_include: "include:spf.fake.test".to_string(),
            dkim_selectors: vec!["k2".to_string(), "k1".to_string()],
            additional_records: vec![
                AdditionalRecord::new(
                    RecordType::Txt,
                    "@",
                    "fake-verify={verification_token}",
                    "Verification",
                ),
                AdditionalRecord::new(
                    RecordType::Cname,
                    "track.{domain}",
                    "{fqdn}.track.fake.test",
                    "Tracking",
                ),
            ],
        }
    }

    #[test]
    fn test_block_order() {
        let domain = validate("example.com").unwrap();
        let records = synthesize(
            &domain,
            &fake_profile(),
            &policy(),
            &DkimOverrides::new(),
            &SynthesisOptions::default(),
        );

        let names: Vec<(RecordType, &str)> = records
            .iter()
            .map(|r| (r.record_type(), r.name()))
            .collect();
        assert_eq!(
            names,
            vec![
                (RecordType::Mx, "@"),
                (RecordType::Mx, "@"),
                (RecordType::Txt, "@"),
                (RecordType::Txt, "_dmarc"),
                (RecordType::Txt, "k2._domainkey"),
                (RecordType::Txt, "k1._domainkey"),
                (RecordType::Txt, "@"),
                (RecordType::Cname, "track.example"),
            ]
        );
    }

    #[test]
    fn test_mx_sorted_and_label_substituted() {
        let domain = validate("shop.example.com").unwrap();
        let records = synthesize(
            &domain,
            &fake_profile(),
            &policy(),
            &DkimOverrides::new(),
            &SynthesisOptions::default(),
        );
        assert_eq!(records[0].priority(), Some(10));
        assert_eq!(records[0].value(), "primary.fake.test");
        assert_eq!(records[1].priority(), Some(20));
        assert_eq!(records[1].value(), "backup.shop.fake.test");
    }

    #[test]
    fn test_spf_and_dmarc_values() {
        let domain = validate("example.com").unwrap();
        let records = synthesize(
            &domain,
            &fake_profile(),
            &policy(),
            &DkimOverrides::new(),
            &SynthesisOptions::default(),
        );
        assert_eq!(records[2].value(), "v=spf1 include:spf.fake.test ~all");
        assert_eq!(
            records[3].value(),
            "v=DMARC1; p=quarantine; rua=mailto:d@example.com"
        );
    }

    #[test]
    fn test_dkim_placeholder_and_override() {
        let domain = validate("example.com").unwrap();
        let mut overrides = DkimOverrides::new();
        overrides.insert("k1".to_string(), "  v=DKIM1; k=rsa; p=MIIB  ".to_string());
        overrides.insert("k2".to_string(), "   ".to_string());
        overrides.insert("unused".to_string(), "v=DKIM1; p=zzz".to_string());

        let records = synthesize(
            &domain,
            &fake_profile(),
            &policy(),
            &overrides,
            &SynthesisOptions::default(),
        );
        assert_eq!(records[4].name(), "k2._domainkey");
        assert_eq!(records[4].value(), DKIM_PLACEHOLDER);
        assert_eq!(records[5].name(), "k1._domainkey");
        assert_eq!(records[5].value(), "v=DKIM1; k=rsa; p=MIIB");
        assert!(records.iter().all(|r| !r.value().contains("zzz")));
    }

    #[test]
    fn test_verification_token_substitution() {
        let domain = validate("example.com").unwrap();
        let profile = fake_profile();

        let without = synthesize(
            &domain,
            &profile,
            &policy(),
            &DkimOverrides::new(),
            &SynthesisOptions::default(),
        );
        assert_eq!(
            without[6].value(),
            format!("fake-verify={VERIFICATION_TOKEN_PLACEHOLDER}")
        );

        let options = SynthesisOptions {
            verification_token: Some("abc123".to_string()),
            ..Default::default()
        };
        let with = synthesize(&domain, &profile, &policy(), &DkimOverrides::new(), &options);
        assert_eq!(with[6].value(), "fake-verify=abc123");
        assert_eq!(with[7].value(), "example.com.track.fake.test");
    }

    #[test]
    fn test_ttl_applied_everywhere() {
        let domain = validate("example.com").unwrap();
        let options = SynthesisOptions {
            ttl: 300,
            ..Default::default()
        };
        let records = synthesize(
            &domain,
            &fake_profile(),
            &policy(),
            &DkimOverrides::new(),
            &options,
        );
        assert!(records.iter().all(|r| r.ttl() == 300));
    }

    #[test]
    fn test_priority_only_on_mx() {
        let domain = validate("example.com").unwrap();
        for profile in ProviderCatalog::builtin().iter() {
            let records = synthesize(
                &domain,
                profile,
                &policy(),
                &DkimOverrides::new(),
                &SynthesisOptions::default(),
            );
            for record in &records {
                assert_eq!(
                    record.priority().is_some(),
                    record.record_type() == RecordType::Mx
                );
            }
        }
    }

    #[test]
    fn test_microsoft_mx_uses_leftmost_label() {
        let catalog = ProviderCatalog::builtin();
        let profile = catalog.get("microsoft-365").unwrap();
        let domain = validate("contoso.com").unwrap();
        let records = synthesize(
            &domain,
            profile,
            &policy(),
            &DkimOverrides::new(),
            &SynthesisOptions::default(),
        );
        assert_eq!(records[0].value(), "contoso.mail.protection.outlook.com");
        assert_eq!(records[0].priority(), Some(0));
    }

    #[test]
    fn test_mismatched_additional_record_skipped() {
        let mut profile = fake_profile();
        profile.additional_records = vec![AdditionalRecord::new(
            RecordType::Mx,
            "bounce",
            "mx.fake.test",
            "No priority",
        )];
        let domain = validate("example.com").unwrap();
        let records = synthesize(
            &domain,
            &profile,
            &policy(),
            &DkimOverrides::new(),
            &SynthesisOptions::default(),
        );
        assert_eq!(records.len(), 6);
    }
}
