//! Ordered tag formatting.
//!
//! Tag order and omission rules live in the caller's list; this module only
//! drops absent entries and joins the rest.

/// Joins `key=value` pairs with `"; "`, skipping entries whose value is `None`.
pub(crate) fn format_tags(tags: &[(&str, Option<String>)]) -> String {
    tags.iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Joins terms with single spaces, skipping empty ones.
pub(crate) fn format_terms(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
