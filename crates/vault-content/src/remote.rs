//! Remote content backend
//!
//! Thin client for a JSON generation gateway. The gateway owns the model
//! and prompt execution; this client owns only the request shape and the
//! mapping of failures into [`ContentError`].

use crate::error::ContentError;
use crate::provider::ContentProvider;
use crate::types::GeneratedContent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vault_catalog::{Chapter, Domain, PartnerRole};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote generation gateway
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: String,
    domain_id: &'a str,
    chapter_id: &'a str,
    role: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

impl RemoteProvider {
    /// Create a client for a gateway base URL
    ///
    /// # Errors
    /// Returns [`ContentError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: None,
        })
    }

    /// Attach a bearer token sent with every request
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.post(format!("{}/{path}", self.base_url));
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

/// Stage-specific analyst guidance, mirrored by every backend
fn stage_guidance(role: PartnerRole) -> &'static str {
    match role {
        PartnerRole::IpDefinition => {
            "Focus on curriculum architecture, accreditation standards, and defining the \
             'Golden Record' of knowledge."
        }
        PartnerRole::LegalStructuring => {
            "Focus on IP protection strategies, licensing frameworks, securities compliance \
             (Reg A), and asset ring-fencing."
        }
        PartnerRole::ProductPackaging => {
            "Focus on EdTech delivery formats, certification design, gamification, and user \
             experience packaging."
        }
        PartnerRole::ContractualLicensing => {
            "Focus on sales channels, government procurement vehicles, enterprise training \
             contracts, and distribution scaling."
        }
        PartnerRole::InstitutionalEmbedding => {
            "Focus on LMS integration points, customer success protocols, sticky renewal \
             mechanisms, and compliance reporting."
        }
    }
}

fn build_generate_prompt(domain: &Domain, chapter: &Chapter, role: PartnerRole) -> String {
    format!(
        "You are the Strategic Analyst for the Unified Knowledge Vault, a defensible \
         intellectual infrastructure asset.\n\
         \n\
         Context:\n\
         - Transformation Stage: {stage}\n\
         - Asset Domain: {domain}\n\
         - Asset Component: {chapter}\n\
         \n\
         Task: Analyze this component from the perspective of an investor or strategic \
         partner involved in the specified transformation stage. {guidance}\n\
         \n\
         Return the response as JSON with fields: overview, key_concepts (5 strings), \
         role_specific_insight, deliverables (3 strings), body.",
        stage = role.stage(),
        domain = domain.name,
        chapter = chapter.title,
        guidance = stage_guidance(role),
    )
}

fn validate(content: GeneratedContent) -> Result<GeneratedContent, ContentError> {
    if content.key_concepts.is_empty() {
        return Err(ContentError::InvalidResponse(
            "key_concepts is empty".to_string(),
        ));
    }
    if content.overview.is_empty() {
        return Err(ContentError::InvalidResponse("overview is empty".to_string()));
    }
    Ok(content)
}

#[async_trait]
impl ContentProvider for RemoteProvider {
    async fn generate(
        &self,
        domain: &Domain,
        chapter: &Chapter,
        role: PartnerRole,
    ) -> Result<GeneratedContent, ContentError> {
        tracing::debug!(domain = %domain.id, chapter = %chapter.id, %role, "remote generate");
        let body = GenerateRequest {
            prompt: build_generate_prompt(domain, chapter, role),
            domain_id: &domain.id,
            chapter_id: &chapter.id,
            role: role.label(),
        };
        let response = self.request("generate").json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Backend(format!(
                "generate returned {}",
                response.status()
            )));
        }
        let content = response
            .json::<GeneratedContent>()
            .await
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;
        validate(content)
    }

    async fn chat(&self, message: &str, context_hint: &str) -> Result<String, ContentError> {
        let body = ChatRequest {
            message,
            context: context_hint,
        };
        let response = self.request("chat").json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Backend(format!(
                "chat returned {}",
                response.status()
            )));
        }
        let parsed = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;
        Ok(parsed.reply)
    }
}
