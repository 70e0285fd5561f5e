//! Session configuration.

use vault_catalog::{Industry, PartnerRole};

/// Storage key the browser build used for progress, kept for data
/// compatibility.
pub const DEFAULT_STORAGE_KEY: &str = "vault_progress";

/// Tunable knobs for a [`crate::VaultSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key the progress store persists under.
    pub storage_key: String,
    /// Role lens active when the session starts.
    pub initial_role: PartnerRole,
    /// Industry filter active when the session starts.
    pub initial_industry: Industry,
}

impl SessionConfig {
    /// Configuration with the defaults the UI shipped with.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            initial_role: PartnerRole::default(),
            initial_industry: Industry::All,
        }
    }

    /// Overrides the progress storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Overrides the starting role lens.
    #[must_use]
    pub fn with_initial_role(mut self, role: PartnerRole) -> Self {
        self.initial_role = role;
        self
    }

    /// Overrides the starting industry filter.
    #[must_use]
    pub fn with_initial_industry(mut self, industry: Industry) -> Self {
        self.initial_industry = industry;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_ui() {
        let config = SessionConfig::default();
        assert_eq!(config.storage_key, "vault_progress");
        assert_eq!(config.initial_role, PartnerRole::IpDefinition);
        assert_eq!(config.initial_industry, Industry::All);
    }

    #[test]
    fn builder_overrides_compose() {
        let config = SessionConfig::new()
            .with_storage_key("test_progress")
            .with_initial_role(PartnerRole::ProductPackaging)
            .with_initial_industry(Industry::Gov);
        assert_eq!(config.storage_key, "test_progress");
        assert_eq!(config.initial_role, PartnerRole::ProductPackaging);
        assert_eq!(config.initial_industry, Industry::Gov);
    }
}
