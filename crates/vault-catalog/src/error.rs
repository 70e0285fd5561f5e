//! Error types for catalog validation

/// Catalog construction errors
///
/// All are load-time errors; a constructed [`crate::Catalog`] is internally
/// consistent for the process lifetime.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Track id appears more than once
    #[error("duplicate track id: {0}")]
    DuplicateTrack(String),

    /// Domain id appears more than once
    #[error("duplicate domain id: {0}")]
    DuplicateDomain(String),

    /// Chapter id appears more than once
    #[error("duplicate chapter id: {0}")]
    DuplicateChapter(String),

    /// Domain references a track missing from the catalog
    #[error("domain {domain} references missing track {track}")]
    OrphanDomain {
        /// Offending domain id
        domain: String,
        /// Referenced track id
        track: String,
    },

    /// No tracks supplied
    #[error("catalog has no tracks")]
    EmptyTracks,

    /// No chapters supplied
    #[error("catalog has no chapters")]
    EmptyChapters,
}
