//! Domain validation and normalization.
//!
//! Key functions:
//! - `validate()` - Accepts a bare hostname or explains why it was rejected
//! - `normalize_pasted_domain()` - Forgiving cleanup of pasted URLs, used only
//!   when the engine runs with `DomainInputPolicy::Lenient`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::ValidationError;
use crate::utils::compile_regex_unsafe;

/// Labels of letters, digits and inner hyphens, ending in an alphabetic TLD of 2+ letters.
const HOSTNAME_PATTERN: &str = r"^(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$";

static HOSTNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HOSTNAME_PATTERN, "HOSTNAME_RE"));

/// A lowercase hostname that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Hostname(String);

impl Hostname {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First label, e.g. `example` for `example.co.uk`.
    pub fn leftmost_label(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a raw domain string.
///
/// Trims surrounding whitespace and lowercases ASCII letters only, so non-ASCII
/// look-alikes are rejected rather than folded. A single trailing dot (fully
/// qualified form) is accepted and dropped. Anything else that is not a bare
/// hostname, including URLs, is rejected unchanged.
///
/// # Errors
///
/// Returns the first problem found: empty input, overall or label length, or
/// a syntax problem with a human-readable reason.
///
/// # Examples
///
/// ```
/// use mail_dns::domain::validate;
///
/// assert_eq!(validate(" Example.COM ").unwrap().as_str(), "example.com");
/// assert!(validate("https://example.com").is_err());
/// ```
pub fn validate(raw: &str) -> Result<Hostname, ValidationError> {
    let lowered = raw.trim().to_ascii_lowercase();
    let candidate = lowered.strip_suffix('.').unwrap_or(&lowered);

    if candidate.is_empty() {
        return Err(ValidationError::EmptyDomain);
    }
    if candidate.len() > MAX_DOMAIN_LENGTH {
        return Err(ValidationError::DomainTooLong(candidate.len()));
    }
    if let Some(label) = candidate.split('.').find(|l| l.len() > MAX_LABEL_LENGTH) {
        return Err(ValidationError::LabelTooLong(label.to_string()));
    }
    if HOSTNAME_RE.is_match(candidate) {
        return Ok(Hostname(candidate.to_string()));
    }

    Err(ValidationError::InvalidDomain {
        input: raw.trim().to_string(),
        reason: describe_problem(candidate),
    })
}

/// Explains why `candidate` failed the hostname pattern.
fn describe_problem(candidate: &str) -> String {
    if candidate.contains("://") || candidate.contains('/') {
        return "enter a bare hostname, not a URL".to_string();
    }
    if candidate.chars().any(char::is_whitespace) {
        return "contains whitespace".to_string();
    }
    if !candidate.contains('.') {
        return "missing a top-level domain".to_string();
    }

    let labels: Vec<&str> = candidate.split('.').collect();
    for label in &labels {
        if label.is_empty() {
            return "contains an empty label".to_string();
        }
        if let Some(bad) = label
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return format!("label '{label}' contains invalid character '{bad}'");
        }
        if label.starts_with('-') || label.ends_with('-') {
            return format!("label '{label}' starts or ends with a hyphen");
        }
    }

    "top-level domain must be at least 2 letters".to_string()
}

/// Cleans up a pasted URL or hostname.
///
/// Lowercases, strips an `http://`/`https://` scheme, anything after the host
/// (path, query, fragment, port), a leading `www.` and a trailing dot. The
/// result still has to go through [`validate`].
///
/// # Examples
///
/// ```
/// use mail_dns::domain::normalize_pasted_domain;
///
/// assert_eq!(
///     normalize_pasted_domain("https://www.Example.com:443/contact?x=1"),
///     "example.com"
/// );
/// ```
pub fn normalize_pasted_domain(raw: &str) -> String {
    let lowered = raw.trim().to_ascii_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.strip_suffix('.').unwrap_or(host).to_string()
}
