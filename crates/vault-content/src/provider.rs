//! Content provider boundary
//!
//! The session core consumes this trait and must not depend on which
//! backend is behind it: a remote text-generation gateway or the local
//! deterministic generator.

use crate::error::ContentError;
use crate::types::GeneratedContent;
use async_trait::async_trait;
use vault_catalog::{Chapter, Domain, PartnerRole};

/// Asynchronous content-generation capability
///
/// One outstanding `generate` call per content-view instance; callers
/// guard against stale resolutions, not the provider.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Produce structured content for a (domain, chapter, role) triple
    async fn generate(
        &self,
        domain: &Domain,
        chapter: &Chapter,
        role: PartnerRole,
    ) -> Result<GeneratedContent, ContentError>;

    /// Free-text chat turn with a navigation-derived context hint
    async fn chat(&self, message: &str, context_hint: &str) -> Result<String, ContentError>;
}
