//! Offline content backend
//!
//! Deterministic generator keyed purely on the (domain, chapter, role)
//! inputs. No network, instant responses; useful for demos and tests.

use crate::error::ContentError;
use crate::provider::ContentProvider;
use crate::types::GeneratedContent;
use async_trait::async_trait;
use vault_catalog::{Chapter, Domain, PartnerRole};

/// Local deterministic content generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    /// Create the offline backend
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn essay(domain: &Domain, chapter: &Chapter, role: PartnerRole) -> String {
    let focus = role.label();
    let sector = match domain.track_id.as_str() {
        "t2" => "Agroforestry",
        "t4" => "Housing",
        _ => "Enterprise",
    };
    format!(
        "# {title}: A Deep Dive into {name}\n\
         \n\
         ## Executive Summary\n\
         In the context of **{focus}**, mastery of **{title}** is not merely an academic \
         exercise but a critical operational necessity. As the **{name}** domain advances, \
         this chapter serves as the foundational text for translating theoretical models \
         into scalable, real-world assets.\n\
         \n\
         ## 1. The Strategic Imperative\n\
         The convergence of regulatory pressure, market demand, and technological capability \
         has created a unique window of opportunity.\n\
         *   **Market Gap:** Traditional approaches to {name} have failed to address the \
         nuance of {title}.\n\
         *   **Scalability:** Standardizing the approach to {title} unlocks replication \
         across multiple jurisdictions.\n\
         *   **Defensibility:** A robust {title} strategy creates a high barrier to entry \
         for competitors lacking this depth of integration.\n\
         \n\
         ## 2. Core Methodologies & Frameworks\n\
         Three primary vectors of action apply to **{title}**: the structural vector (the \
         physical or digital architecture supporting it), the process vector (documented, \
         tested, and optimized operating procedures so every deployment of {name} achieves \
         consistent quality), and the cultural vector (change management protocols aligning \
         stakeholders around a shared vision of success).\n\
         \n\
         ## 3. Implementation in Practice\n\
         Consider a recent deployment in the **{sector} Sector**. A lack of standardized \
         **{title}** protocols led to a 40% inefficiency rate. Applying the frameworks in \
         this chapter shortened decision cycles by three weeks, improved regulatory \
         adherence from 75% to 98%, and supported a 15% price premium.\n\
         \n\
         ## 4. The Role of {focus}\n\
         From the perspective of **{focus}**, this chapter highlights specific \
         responsibilities: identifying where {title} intersects with liability, monetizing \
         the efficiency gains, and governing {title} as an ongoing practice rather than a \
         one-time fix.\n\
         \n\
         ## 5. Future Outlook & Conclusion\n\
         Emerging trends in AI, climate resilience, and decentralized governance suggest \
         that early adopters of these standards will define the market for the next decade. \
         This curriculum positions you not just as a participant, but as a leader in that \
         future.\n",
        title = chapter.title,
        name = domain.name,
        focus = focus,
        sector = sector,
    )
}

fn role_sections(domain: &Domain, chapter: &Chapter, role: PartnerRole) -> GeneratedContent {
    let title = &chapter.title;
    let name = &domain.name;
    let (overview, key_concepts, insight, deliverables) = match role {
        PartnerRole::IpDefinition => (
            format!(
                "In the IP Definition phase, we establish the canonical knowledge base for \
                 \"{title}\". This involves rigorous academic vetting and standardization of \
                 the \"{name}\" domain to ensure it meets accreditation standards for \
                 university-level deployment."
            ),
            [
                "Curriculum Standardization",
                "Learning Outcome Mapping",
                "Academic Accreditation Alignment",
                "Knowledge Graph Construction",
                "Instructor Pedagogy Definition",
            ],
            "A defensible asset begins with a 'Golden Record' of knowledge. By defining the \
             standard, we force the market to adapt to our specifications, creating an \
             initial moat against fragmentation.",
            [
                "Completion of Core Syllabus Architecture",
                "Validation by 3 Subject Matter Experts",
                "Mapping to Federal Workforce Codes",
            ],
        ),
        PartnerRole::LegalStructuring => (
            format!(
                "Legal Structuring focuses on encapsulating \"{title}\" as a discrete, \
                 protectable asset. We apply copyright frameworks to the specific \
                 methodologies of \"{name}\" to prevent leakage and enable fractional \
                 licensing."
            ),
            [
                "Intellectual Property Ring-Fencing",
                "Copyright & Trademark Registration",
                "Licensing Vehicle Formation",
                "Royalty Flow Definition",
                "Territorial Rights Segmentation",
            ],
            "Raw knowledge is hard to monetize. Structured IP is a tradable asset. This \
             phase transforms the curriculum into a legal instrument that can be leased to \
             institutions without transferring ownership.",
            [
                "Filing of Copyright Protections",
                "Drafting of Master License Agreements",
                "Securities Compliance Review (Reg A)",
            ],
        ),
        PartnerRole::ProductPackaging => (
            format!(
                "Product Packaging translates the raw IP of \"{title}\" into user-centric \
                 formats. For \"{name}\", this means high-fidelity digital modules, \
                 instructor guides, and gamified assessments that drive engagement."
            ),
            [
                "User Experience (UX) Design",
                "Gamification Mechanics",
                "Multi-Modal Content Delivery",
                "Accessibility Compliance (WCAG)",
                "Brand & Certification Badge Design",
            ],
            "Institutions buy usability, not just information. Superior packaging reduces \
             friction in adoption and allows us to command a premium price point compared \
             to static textbooks.",
            [
                "Production of Video & Interactive Assets",
                "LMS Compatibility Testing (SCORM/xAPI)",
                "Beta User Testing & Feedback Loop",
            ],
        ),
        PartnerRole::ContractualLicensing => (
            format!(
                "Contractual Licensing is the sales engine for \"{title}\". We establish \
                 high-volume B2B distribution channels for \"{name}\", focusing on \
                 multi-year enterprise contracts rather than individual seat sales."
            ),
            [
                "Enterprise Sales Strategy",
                "Government Procurement Channels",
                "Channel Partner Incentives",
                "Volume Pricing Architectures",
                "SLA & Support Definition",
            ],
            "Revenue durability comes from the contract structure. We utilize 'Take-or-Pay' \
             clauses and annual price lifts to ensure that the asset yields compounding \
             returns over time.",
            [
                "Signing of First Anchor Institution",
                "Establishment of CRM Pipeline",
                "Finalization of Sales Decks & Collateral",
            ],
        ),
        PartnerRole::InstitutionalEmbedding => (
            format!(
                "Institutional Embedding ensures \"{title}\" becomes indispensable. We \
                 integrate \"{name}\" protocols directly into the partner's LMS and \
                 operational workflows, making removal operationally painful."
            ),
            [
                "Deep LMS API Integration",
                "Customer Success Automation",
                "Operational Workflow Dependency",
                "Compliance Reporting Dashboards",
                "Renewal Trigger Optimization",
            ],
            "The ultimate defense is embedding. When our certifications are tied to a \
             partner's insurance, compliance, or HR systems, churn drops to near zero, \
             securing the asset's long-term value.",
            [
                "Successful API Data Flow Test",
                "Deployment of Customer Success Playbook",
                "First Annual Renewal Execution",
            ],
        ),
    };

    GeneratedContent {
        overview,
        key_concepts: key_concepts.iter().map(|s| (*s).to_string()).collect(),
        role_specific_insight: insight.to_string(),
        deliverables: deliverables.iter().map(|s| (*s).to_string()).collect(),
        body: essay(domain, chapter, role),
    }
}

/// Keyword-driven mock strategist reply
fn strategist_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if mentions(&["revenue", "money", "financial", "cost", "growth"]) {
        "Our financial model projects a climb from $600k in Year 1 to over $20M ARR by \
         Year 5. This is driven by high-retention institutional licensing rather than \
         volatile one-off sales."
    } else if mentions(&["competitor", "competition", "market"]) {
        "Most competitors focus on B2C sales with high churn. Our advantage is the \
         'Golden Record' vault approach: a unified, licensed asset embedded directly into \
         universities and corporations."
    } else if mentions(&["risk", "fail", "problem", "challenge"]) {
        "The primary risks are content decay and low adoption. We mitigate decay through \
         mandatory annual renewal updates, and we solve adoption by selling top-down to \
         institutions rather than bottom-up to students."
    } else if mentions(&["team", "partner", "who"]) {
        "We partner with top-tier subject matter experts for IP definition, and \
         specialized legal firms for structuring. Our core team focuses on the platform \
         architecture and licensing distribution."
    } else if mentions(&["climate", "agroforestry", "land"]) {
        "Climate & Agroforestry is our pilot sector. It represents a high-demand, \
         low-supply knowledge market where standardized certification is urgently needed \
         for government grants and carbon credit verification."
    } else if mentions(&["workforce", "job", "training"]) {
        "Our Workforce Development tracks are designed to align with federal grant codes \
         (WIOA), ensuring that institutions can use public funding to license our \
         curriculum."
    } else {
        "I am the Vault Strategist. I can provide details on our Financial Model, \
         Competitive Landscape, Legal Structuring, or specific Curriculum Tracks. What \
         would you like to explore?"
    }
}

#[async_trait]
impl ContentProvider for OfflineProvider {
    async fn generate(
        &self,
        domain: &Domain,
        chapter: &Chapter,
        role: PartnerRole,
    ) -> Result<GeneratedContent, ContentError> {
        tracing::debug!(domain = %domain.id, chapter = %chapter.id, %role, "offline generate");
        Ok(role_sections(domain, chapter, role))
    }

    async fn chat(&self, message: &str, context_hint: &str) -> Result<String, ContentError> {
        tracing::debug!(context = context_hint, "offline chat");
        Ok(strategist_reply(message).to_string())
    }
}
