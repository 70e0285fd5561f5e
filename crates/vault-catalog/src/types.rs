//! Catalog data types
//!
//! Defines the immutable reference data the platform navigates over:
//! - Tracks (top-level knowledge assets)
//! - Domains (many-to-one under tracks)
//! - Chapters (the shared placeholder curriculum)
//! - Partner roles, industries, and icon tags

use serde::{Deserialize, Serialize};

/// A top-level knowledge track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stable identifier, e.g. `t1`
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Display range label, e.g. "Topics 1-5"
    pub topics_range: String,
    /// Icon tag for rendering
    pub icon: IconTag,
    /// Estimated chapter count shown in summaries
    pub estimated_chapters: u32,
}

/// A knowledge domain owned by exactly one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Stable identifier, e.g. `d1`
    pub id: String,
    /// Owning track identifier
    pub track_id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
}

/// One chapter of the shared curriculum
///
/// The same ordered chapter sequence applies to every domain; this is a
/// deliberate placeholder curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Stable identifier, e.g. `1`
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
}

/// Partner perspective (transformation stage) for content generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerRole {
    /// Transformation 1: defining the knowledge core
    IpDefinition,
    /// Transformation 2: structuring the legal asset
    LegalStructuring,
    /// Transformation 3: packaging for market
    ProductPackaging,
    /// Transformation 4: B2B distribution
    ContractualLicensing,
    /// Transformation 5: operational embedding and renewals
    InstitutionalEmbedding,
}

impl PartnerRole {
    /// All roles in transformation order
    pub const ALL: [PartnerRole; 5] = [
        PartnerRole::IpDefinition,
        PartnerRole::LegalStructuring,
        PartnerRole::ProductPackaging,
        PartnerRole::ContractualLicensing,
        PartnerRole::InstitutionalEmbedding,
    ];

    /// Zero-based transformation index
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            PartnerRole::IpDefinition => 0,
            PartnerRole::LegalStructuring => 1,
            PartnerRole::ProductPackaging => 2,
            PartnerRole::ContractualLicensing => 3,
            PartnerRole::InstitutionalEmbedding => 4,
        }
    }

    /// Role for a transformation index, if in range
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short label, e.g. "IP Definition"
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PartnerRole::IpDefinition => "IP Definition",
            PartnerRole::LegalStructuring => "Legal Structuring",
            PartnerRole::ProductPackaging => "Product Packaging",
            PartnerRole::ContractualLicensing => "Contractual Licensing",
            PartnerRole::InstitutionalEmbedding => "Institutional Embedding",
        }
    }

    /// Full stage heading, e.g. "Transformation 1: IP Definition"
    #[inline]
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            PartnerRole::IpDefinition => "Transformation 1: IP Definition",
            PartnerRole::LegalStructuring => "Transformation 2: Legal Structuring",
            PartnerRole::ProductPackaging => "Transformation 3: Product Packaging",
            PartnerRole::ContractualLicensing => "Transformation 4: Contractual Licensing",
            PartnerRole::InstitutionalEmbedding => "Transformation 5: Institutional Embedding",
        }
    }

    /// Partner profile description shown alongside the role
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PartnerRole::IpDefinition => {
                "Curriculum architects, workforce design firms, and LMS consultants defining the knowledge core."
            }
            PartnerRole::LegalStructuring => {
                "IP licensing firms, Reg A securities counsel, and trust attorneys structuring the asset."
            }
            PartnerRole::ProductPackaging => {
                "EdTech product teams, certification designers, and platform integrators packaging for market."
            }
            PartnerRole::ContractualLicensing => {
                "Higher-ed sales orgs, gov procurement specialists, and enterprise distributors."
            }
            PartnerRole::InstitutionalEmbedding => {
                "LMS integrators, success providers, and compliance consultants ensuring renewals."
            }
        }
    }
}

impl Default for PartnerRole {
    fn default() -> Self {
        PartnerRole::IpDefinition
    }
}

impl std::fmt::Display for PartnerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stage())
    }
}

/// Industry segment used to filter the track list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    /// No filter
    All,
    /// Higher education
    HigherEd,
    /// Enterprise / corporate
    Corporate,
    /// Government and municipal
    Gov,
    /// Vocational and trade
    Trade,
}

impl Industry {
    /// All segments in display order
    pub const SEGMENTS: [Industry; 5] = [
        Industry::All,
        Industry::HigherEd,
        Industry::Corporate,
        Industry::Gov,
        Industry::Trade,
    ];

    /// Stable string id, e.g. `higher-ed`
    #[inline]
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Industry::All => "all",
            Industry::HigherEd => "higher-ed",
            Industry::Corporate => "corporate",
            Industry::Gov => "gov",
            Industry::Trade => "trade",
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Industry::All => "All Sectors",
            Industry::HigherEd => "Higher Education",
            Industry::Corporate => "Enterprise/Corporate",
            Industry::Gov => "Government & Municipal",
            Industry::Trade => "Vocational & Trade",
        }
    }

    /// Parse a string id; unknown ids yield `None` and callers fall back
    /// to the unfiltered list
    #[inline]
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::SEGMENTS.into_iter().find(|s| s.id() == id)
    }
}

impl Default for Industry {
    fn default() -> Self {
        Industry::All
    }
}

/// Closed set of icon tags the catalog may reference
///
/// Replaces stringly-typed icon lookup: unknown tags parse to a defined
/// fallback and are reported during catalog validation, not at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTag {
    /// Soil / regenerative systems
    Leaf,
    /// Agroforestry
    TreeDeciduous,
    /// Workforce
    Users,
    /// Housing
    Home,
    /// Governance
    Scale,
    /// Finance
    Briefcase,
    /// Health
    Activity,
    /// Stewardship
    ShieldCheck,
    /// Fallback for tags outside the closed set
    Fallback,
}

impl IconTag {
    /// Parse a tag string, falling back to [`IconTag::Fallback`]
    #[inline]
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Leaf" => IconTag::Leaf,
            "TreeDeciduous" => IconTag::TreeDeciduous,
            "Users" => IconTag::Users,
            "Home" => IconTag::Home,
            "Scale" => IconTag::Scale,
            "Briefcase" => IconTag::Briefcase,
            "Activity" => IconTag::Activity,
            "ShieldCheck" => IconTag::ShieldCheck,
            _ => IconTag::Fallback,
        }
    }

    /// Whether this tag is a member of the closed set
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, IconTag::Fallback)
    }
}
