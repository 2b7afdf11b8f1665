//! Batch orchestration.
//!
//! Validates the shared DMARC policy once, then runs validate-then-synthesize
//! for each distinct domain. Whole-request problems (unknown provider, bad
//! policy, oversized or empty batch) fail fast; per-domain problems are
//! collected in `rejected` and never stop the rest of the batch.

mod types;

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::config::{Config, DomainInputPolicy};
use crate::domain::{normalize_pasted_domain, validate};
use crate::error_handling::GenerateError;
use crate::policy::build;
use crate::provider::{ProviderCatalog, ProviderProfile};
use crate::records::{synthesize, DkimOverrides, SynthesisOptions};

// Re-export public API
pub use types::{BatchResult, DomainResult, GenerateRequest, RejectedInput};

/// Runs one generate request.
///
/// Inputs are de-duplicated case-insensitively (after trimming) before
/// anything else happens, keeping the first spelling seen.
///
/// # Errors
///
/// - `UnknownProvider` if `provider_id` is not in `catalog`
/// - `InvalidPolicy` with every DMARC problem found
/// - `NoDomains` if the request has no domain strings
/// - `BatchTooLarge` if more than `config.max_batch_domains` distinct inputs remain
///
/// # Examples
///
/// ```
/// use mail_dns::policy::{DmarcDisposition, DmarcOptions};
/// use mail_dns::{run, Config, GenerateRequest, ProviderCatalog};
///
/// let request = GenerateRequest {
///     domains: vec!["example.com".to_string(), "bad_domain!".to_string()],
///     provider_id: "google-workspace".to_string(),
///     dmarc: DmarcOptions::new(DmarcDisposition::Quarantine, "d@example.com"),
///     dkim_overrides: Default::default(),
///     verification_token: None,
/// };
/// let result = run(&request, &ProviderCatalog::builtin(), &Config::default()).unwrap();
/// assert_eq!(result.accepted.len(), 1);
/// assert_eq!(result.rejected[0].raw_input, "bad_domain!");
/// ```
pub fn run(
    request: &GenerateRequest,
    catalog: &ProviderCatalog,
    config: &Config,
) -> Result<BatchResult, GenerateError> {
    let profile = catalog
        .get(&request.provider_id)
        .ok_or_else(|| GenerateError::UnknownProvider(request.provider_id.clone()))?;

    let policy = build(&request.dmarc).map_err(GenerateError::InvalidPolicy)?;

    for selector in unknown_dkim_selectors(profile, &request.dkim_overrides) {
        warn!(
            "Ignoring DKIM value for selector '{}': {} does not use it",
            selector, profile.display_name
        );
    }

    let inputs = dedup_inputs(&request.domains);
    if inputs.is_empty() {
        return Err(GenerateError::NoDomains);
    }
    if inputs.len() > config.max_batch_domains {
        return Err(GenerateError::BatchTooLarge {
            count: inputs.len(),
            max: config.max_batch_domains,
        });
    }

    info!(
        "Generating {} records for {} domain{}",
        profile.display_name,
        inputs.len(),
        if inputs.len() == 1 { "" } else { "s" }
    );

    let options = SynthesisOptions {
        ttl: config.ttl,
        verification_token: request.verification_token.clone(),
    };

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    let mut seen_hosts = HashSet::new();

    for raw in inputs {
        let candidate = match config.domain_input {
            DomainInputPolicy::Strict => raw.to_string(),
            DomainInputPolicy::Lenient => normalize_pasted_domain(raw),
        };

        let domain = match validate(&candidate) {
            Ok(domain) => domain,
            Err(e) => {
                warn!("Rejected domain input '{}': {}", raw, e);
                rejected.push(RejectedInput {
                    raw_input: raw.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !seen_hosts.insert(domain.clone()) {
            debug!("'{}' resolves to {} which is already in this batch", raw, domain);
            rejected.push(RejectedInput {
                raw_input: raw.to_string(),
                reason: format!("Duplicate of {domain} earlier in this batch"),
            });
            continue;
        }

        let records = synthesize(
            &domain,
            profile,
            &policy,
            &request.dkim_overrides,
            &options,
        );
        accepted.push(DomainResult { domain, records });
    }

    info!(
        "Batch complete: {} accepted, {} rejected",
        accepted.len(),
        rejected.len()
    );

    Ok(BatchResult {
        provider_id: profile.id.clone(),
        provider_name: profile.display_name.clone(),
        accepted,
        rejected,
    })
}

/// Override selectors that `profile` does not publish, sorted.
fn unknown_dkim_selectors<'a>(
    profile: &ProviderProfile,
    overrides: &'a DkimOverrides,
) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = overrides
        .keys()
        .filter(|key| !profile.dkim_selectors.contains(key))
        .map(String::as_str)
        .collect();
    unknown.sort_unstable();
    unknown
}

/// Case-insensitive de-duplication on the trimmed input, first spelling wins.
fn dedup_inputs(raw_inputs: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    raw_inputs
        .iter()
        .map(String::as_str)
        .filter(|raw| seen.insert(raw.trim().to_ascii_lowercase()))
        .collect()
}

/// Splits pasted bulk input into domain strings.
///
/// Accepts newline- or comma-separated entries. Blank entries and lines
/// starting with `#` are dropped.
///
/// # Examples
///
/// ```
/// use mail_dns::batch::split_bulk_input;
///
/// let text = "example.com\n# staging\nexample.org, example.net\n\n";
/// assert_eq!(
///     split_bulk_input(text),
///     vec!["example.com", "example.org", "example.net"]
/// );
/// ```
pub fn split_bulk_input(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
