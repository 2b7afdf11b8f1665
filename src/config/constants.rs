//! Configuration constants.
//!
//! Defaults used by the record synthesizer, the policy builder and the batch
//! orchestrator. Everything here is a plain `const`; the engine holds no
//! mutable module-level state.

/// Application name used in export filenames when the caller does not set one.
pub const DEFAULT_APP_NAME: &str = "mail_dns";

/// Title segment of every export filename.
pub const EXPORT_TOOL_NAME: &str = "DNS Record Generator";

/// TTL in seconds applied to every generated record.
pub const DEFAULT_TTL: u32 = 3600;

/// Maximum number of distinct domains accepted in a single batch.
/// Larger batches are rejected as a whole, never truncated.
pub const MAX_BATCH_DOMAINS: usize = 50;

// DNS syntax limits (RFC 1035)
/// Maximum length of a full hostname, without the trailing dot.
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a single label.
pub const MAX_LABEL_LENGTH: usize = 63;

// DMARC defaults (RFC 7489 section 6.3)
/// `pct=` is omitted from the record when the percentage equals this value.
pub const DEFAULT_DMARC_PERCENTAGE: u8 = 100;
/// `ri=` is omitted from the record when the interval equals this value.
pub const DEFAULT_DMARC_REPORTING_INTERVAL: u32 = 86_400;

// Placeholders
/// Value written into DKIM records when the caller has no public key yet.
pub const DKIM_PLACEHOLDER: &str = "VALUE_REQUIRED_FROM_PROVIDER_CONSOLE";
/// Substituted for `{verification_token}` when the request carries no token.
pub const VERIFICATION_TOKEN_PLACEHOLDER: &str = "VERIFICATION_TOKEN_FROM_PROVIDER_CONSOLE";

/// Template placeholder replaced with the leftmost label of the domain.
pub const DOMAIN_LABEL_PLACEHOLDER: &str = "{domain}";
/// Template placeholder replaced with the full validated hostname.
pub const FQDN_PLACEHOLDER: &str = "{fqdn}";
/// Template placeholder replaced with the provider verification token.
pub const VERIFICATION_TOKEN_TEMPLATE: &str = "{verification_token}";

/// SPF qualifier terminating every generated SPF record (soft fail).
pub const SPF_ALL_QUALIFIER: &str = "~all";
