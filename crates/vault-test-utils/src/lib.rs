//! Testing utilities for the vault workspace
//!
//! Shared fixtures: a scripted content provider with call recording and
//! canned content builders.

#![allow(missing_docs)]

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use vault_catalog::{Chapter, Domain, PartnerRole};
use vault_content::{ContentError, ContentProvider, GeneratedContent};

/// One recorded `generate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCall {
    pub domain_id: String,
    pub chapter_id: String,
    pub role: PartnerRole,
}

/// Canned content tagged with the requesting triple, so tests can tell
/// results apart
#[must_use]
pub fn content_for(domain_id: &str, chapter_id: &str, role: PartnerRole) -> GeneratedContent {
    GeneratedContent {
        overview: format!("overview {domain_id}/{chapter_id}/{}", role.label()),
        key_concepts: (1..=5).map(|i| format!("concept {i}")).collect(),
        role_specific_insight: format!("insight for {}", role.label()),
        deliverables: (1..=3).map(|i| format!("deliverable {i}")).collect(),
        body: format!("body {domain_id}/{chapter_id}"),
    }
}

/// Provider returning canned content and recording every call
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    fail_generate: bool,
    fail_chat: bool,
    chat_reply: Option<String>,
    calls: Mutex<Vec<GenerateCall>>,
}

impl ScriptedProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `generate` call fail
    #[must_use]
    pub fn failing_generate() -> Self {
        Self {
            fail_generate: true,
            ..Self::default()
        }
    }

    /// Make every `chat` call fail
    #[must_use]
    pub fn failing_chat() -> Self {
        Self {
            fail_chat: true,
            ..Self::default()
        }
    }

    /// Fix the chat reply
    #[must_use]
    pub fn with_chat_reply(mut self, reply: impl Into<String>) -> Self {
        self.chat_reply = Some(reply.into());
        self
    }

    /// Calls recorded so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ContentProvider for ScriptedProvider {
    async fn generate(
        &self,
        domain: &Domain,
        chapter: &Chapter,
        role: PartnerRole,
    ) -> Result<GeneratedContent, ContentError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(GenerateCall {
                domain_id: domain.id.clone(),
                chapter_id: chapter.id.clone(),
                role,
            });
        if self.fail_generate {
            return Err(ContentError::Backend("scripted failure".to_string()));
        }
        Ok(content_for(&domain.id, &chapter.id, role))
    }

    async fn chat(&self, _message: &str, _context_hint: &str) -> Result<String, ContentError> {
        if self.fail_chat {
            return Err(ContentError::Backend("scripted failure".to_string()));
        }
        Ok(self
            .chat_reply
            .clone()
            .unwrap_or_else(|| "scripted reply".to_string()))
    }
}
