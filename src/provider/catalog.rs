//! Provider catalog construction and lookup.

use std::collections::HashSet;

use crate::error_handling::CatalogError;

use super::builtin::builtin_profiles;
use super::profile::ProviderProfile;

/// Immutable set of provider profiles, keyed by `id`.
///
/// Iteration follows declaration order so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCatalog {
    profiles: Vec<ProviderProfile>,
}

impl ProviderCatalog {
    /// Builds a catalog from arbitrary profiles, checking that ids are unique,
    /// every profile has at least one MX target and additional records respect
    /// the MX priority rule.
    pub fn new(profiles: Vec<ProviderProfile>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(CatalogError::DuplicateProvider(profile.id.clone()));
            }
            if profile.mx_records.is_empty() {
                return Err(CatalogError::EmptyMx(profile.id.clone()));
            }
            for extra in &profile.additional_records {
                let reason = match (extra.record_type.has_priority(), extra.priority) {
                    (true, None) => Some("MX records need a priority"),
                    (false, Some(_)) => Some("only MX records may carry a priority"),
                    _ => None,
                };
                if let Some(reason) = reason {
                    return Err(CatalogError::InvalidAdditionalRecord {
                        provider: profile.id.clone(),
                        name: extra.name.clone(),
                        reason,
                    });
                }
            }
        }
        Ok(Self { profiles })
    }

    /// The profiles shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Parses a JSON array of profiles and validates it like [`Self::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mail_dns::ProviderCatalog;
    ///
    /// let json = r#"[{
    ///     "id": "acme",
    ///     "display_name": "Acme Mail",
    ///     "mx_records": [{"priority": 10, "host_template": "mx.acme.test"}],
    ///     "spf_include": "include:spf.acme.test",
    ///     "dkim_selectors": ["acme"]
    /// }]"#;
    /// let catalog = ProviderCatalog::from_json(json).unwrap();
    /// assert!(catalog.get("acme").is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<ProviderProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    pub fn get(&self, id: &str) -> Option<&ProviderProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderProfile> {
        self.profiles.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|profile| profile.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
