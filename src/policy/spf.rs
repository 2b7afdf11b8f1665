//! SPF record value.

use crate::config::SPF_ALL_QUALIFIER;

use super::tags::format_terms;

/// Renders `v=spf1 <mechanisms...> ~all`.
///
/// The record always ends in a soft fail; `-all` is never generated.
///
/// # Examples
///
/// ```
/// use mail_dns::policy::spf_value;
///
/// assert_eq!(
///     spf_value(&["include:_spf.google.com"]),
///     "v=spf1 include:_spf.google.com ~all"
/// );
/// ```
pub fn spf_value(mechanisms: &[&str]) -> String {
    let mut terms = Vec::with_capacity(mechanisms.len() + 2);
    terms.push("v=spf1");
    terms.extend_from_slice(mechanisms);
    terms.push(SPF_ALL_QUALIFIER);
    format_terms(&terms)
}
