//! DMARC policy builder.
//!
//! Turns user-selected [`DmarcOptions`] into a validated [`DmarcPolicy`] and
//! renders it as a `_dmarc` TXT value. Tag order is fixed:
//!
//! `v; p; sp; pct; rua; ruf; fo; adkim; aspf; ri`
//!
//! Defaults are omitted: `pct` at 100, `ri` at 86400, relaxed alignment, and
//! `sp` when it is absent or equal to `p`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::{DEFAULT_DMARC_PERCENTAGE, DEFAULT_DMARC_REPORTING_INTERVAL};
use crate::error_handling::ValidationError;
use crate::utils::compile_regex_unsafe;

use super::tags::format_tags;

/// local-part@domain, where the domain has at least two dot-separated labels.
const EMAIL_PATTERN: &str = concat!(
    r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+",
    r"@[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
    r"(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+$",
);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));

/// Receiver action for mail failing DMARC (`p=` / `sp=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DmarcDisposition {
    /// Monitor only
    None,
    Quarantine,
    Reject,
}

impl FromStr for DmarcDisposition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "monitor" => Ok(DmarcDisposition::None),
            "quarantine" => Ok(DmarcDisposition::Quarantine),
            "reject" => Ok(DmarcDisposition::Reject),
            _ => Err(ValidationError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Identifier alignment mode (`adkim=` / `aspf=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    #[default]
    Relaxed,
    Strict,
}

impl FromStr for Alignment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" | "r" => Ok(Alignment::Relaxed),
            "strict" | "s" => Ok(Alignment::Strict),
            _ => Err(ValidationError::UnknownAlignment(s.to_string())),
        }
    }
}

/// Failure reporting option (`fo=`). Variant order is the emitted order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
pub enum FailureOption {
    /// Report when all mechanisms fail
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    AllFail,
    /// Report when any mechanism fails
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    AnyFail,
    /// Report on DKIM failure
    #[serde(rename = "d")]
    #[strum(serialize = "d")]
    Dkim,
    /// Report on SPF failure
    #[serde(rename = "s")]
    #[strum(serialize = "s")]
    Spf,
}

impl FromStr for FailureOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" => Ok(FailureOption::AllFail),
            "1" => Ok(FailureOption::AnyFail),
            "d" => Ok(FailureOption::Dkim),
            "s" => Ok(FailureOption::Spf),
            _ => Err(ValidationError::UnknownFailureOption(s.to_string())),
        }
    }
}

/// Raw DMARC choices as collected from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DmarcOptions {
    pub policy: DmarcDisposition,
    #[serde(default)]
    pub subdomain_policy: Option<DmarcDisposition>,
    /// 1-100, default 100
    #[serde(default)]
    pub percentage: Option<u16>,
    pub aggregate_report_address: String,
    #[serde(default)]
    pub forensic_report_address: Option<String>,
    #[serde(default)]
    pub spf_alignment: Option<Alignment>,
    #[serde(default)]
    pub dkim_alignment: Option<Alignment>,
    /// Default 86400
    #[serde(default)]
    pub reporting_interval_seconds: Option<u32>,
    /// Any of `0`, `1`, `d`, `s`
    #[serde(default)]
    pub failure_options: Vec<String>,
}

impl DmarcOptions {
    /// Options with only the required fields set.
    pub fn new(policy: DmarcDisposition, aggregate_report_address: &str) -> Self {
        Self {
            policy,
            subdomain_policy: None,
            percentage: None,
            aggregate_report_address: aggregate_report_address.to_string(),
            forensic_report_address: None,
            spf_alignment: None,
            dkim_alignment: None,
            reporting_interval_seconds: None,
            failure_options: Vec::new(),
        }
    }
}

/// A validated DMARC policy, shared by every domain in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DmarcPolicy {
    pub policy: DmarcDisposition,
    pub subdomain_policy: Option<DmarcDisposition>,
    pub percentage: u8,
    pub aggregate_report_address: String,
    pub forensic_report_address: Option<String>,
    pub spf_alignment: Alignment,
    pub dkim_alignment: Alignment,
    pub reporting_interval_seconds: u32,
    /// Sorted and de-duplicated
    pub failure_options: Vec<FailureOption>,
}

impl DmarcPolicy {
    /// Tags in emission order; `None` marks a tag left at its default.
    pub fn tags(&self) -> Vec<(&'static str, Option<String>)> {
        let strict =
            |alignment: Alignment| (alignment == Alignment::Strict).then(|| "s".to_string());

        vec![
            ("v", Some("DMARC1".to_string())),
            ("p", Some(self.policy.to_string())),
            (
                "sp",
                self.subdomain_policy
                    .filter(|sp| *sp != self.policy)
                    .map(|sp| sp.to_string()),
            ),
            (
                "pct",
                (self.percentage != DEFAULT_DMARC_PERCENTAGE).then(|| self.percentage.to_string()),
            ),
            ("rua", Some(format!("mailto:{}", self.aggregate_report_address))),
            (
                "ruf",
                self.forensic_report_address
                    .as_ref()
                    .map(|address| format!("mailto:{address}")),
            ),
            (
                "fo",
                (!self.failure_options.is_empty()).then(|| {
                    self.failure_options
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(":")
                }),
            ),
            ("adkim", strict(self.dkim_alignment)),
            ("aspf", strict(self.spf_alignment)),
            (
                "ri",
                (self.reporting_interval_seconds != DEFAULT_DMARC_REPORTING_INTERVAL)
                    .then(|| self.reporting_interval_seconds.to_string()),
            ),
        ]
    }

    /// The `_dmarc` TXT record value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mail_dns::policy::{build, DmarcDisposition, DmarcOptions};
    ///
    /// let options = DmarcOptions::new(DmarcDisposition::Quarantine, "d@example.com");
    /// let policy = build(&options).unwrap();
    /// assert_eq!(
    ///     policy.record_value(),
    ///     "v=DMARC1; p=quarantine; rua=mailto:d@example.com"
    /// );
    /// ```
    pub fn record_value(&self) -> String {
        format_tags(&self.tags())
    }
}

fn is_plausible_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}

/// Validates DMARC options.
///
/// Every problem is collected before returning so the caller can show the
/// complete list at once. Out-of-range percentages are rejected, not clamped.
///
/// # Errors
///
/// Returns all validation errors found, in field order.
pub fn build(options: &DmarcOptions) -> Result<DmarcPolicy, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let aggregate = options.aggregate_report_address.trim().to_string();
    if !is_plausible_email(&aggregate) {
        errors.push(ValidationError::InvalidEmail {
            field: "aggregate report address",
            value: aggregate.clone(),
        });
    }

    let forensic = options
        .forensic_report_address
        .as_deref()
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string);
    if let Some(address) = &forensic {
        if !is_plausible_email(address) {
            errors.push(ValidationError::InvalidEmail {
                field: "forensic report address",
                value: address.clone(),
            });
        }
    }

    let percentage = options
        .percentage
        .unwrap_or(u16::from(DEFAULT_DMARC_PERCENTAGE));
    let percentage = match u8::try_from(percentage) {
        Ok(pct) if (1..=100).contains(&pct) => pct,
        _ => {
            errors.push(ValidationError::PercentageOutOfRange(percentage));
            DEFAULT_DMARC_PERCENTAGE
        }
    };

    let interval = options
        .reporting_interval_seconds
        .unwrap_or(DEFAULT_DMARC_REPORTING_INTERVAL);
    if interval == 0 {
        errors.push(ValidationError::InvalidReportingInterval(interval));
    }

    let mut failure_options = Vec::new();
    for raw in &options.failure_options {
        match raw.parse::<FailureOption>() {
            Ok(option) => failure_options.push(option),
            Err(e) => errors.push(e),
        }
    }
    failure_options.sort();
    failure_options.dedup();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(DmarcPolicy {
        policy: options.policy,
        subdomain_policy: options.subdomain_policy,
        percentage,
        aggregate_report_address: aggregate,
        forensic_report_address: forensic,
        spf_alignment: options.spf_alignment.unwrap_or_default(),
        dkim_alignment: options.dkim_alignment.unwrap_or_default(),
        reporting_interval_seconds: interval,
        failure_options,
    })
}
