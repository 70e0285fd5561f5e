//! Generated content shape

use serde::{Deserialize, Serialize};

/// Structured content produced for one (domain, chapter, role) triple
///
/// Produced fresh per triple and never persisted; the content view fetches
/// each time it is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Strategic summary of the component
    pub overview: String,
    /// Five key value drivers, in order
    pub key_concepts: Vec<String>,
    /// Thesis statement for the selected role
    pub role_specific_insight: String,
    /// Three operational deliverables, in order
    pub deliverables: Vec<String>,
    /// Long-form body text
    pub body: String,
}
