//! Catalog index
//!
//! Validated lookup structure over tracks, domains, and the shared chapter
//! sequence, plus industry-based track filtering.

use crate::error::CatalogError;
use crate::types::{Chapter, Domain, Industry, Track};

/// Fixed industry membership table
///
/// Tracks may belong to multiple industries. `All` has no table entry and
/// always resolves to the full list.
fn member_ids(industry: Industry) -> Option<&'static [&'static str]> {
    match industry {
        Industry::All => None,
        Industry::HigherEd => Some(&["t1", "t2", "t6", "t8"]),
        Industry::Corporate => Some(&["t3", "t6", "t7", "t8"]),
        Industry::Gov => Some(&["t2", "t4", "t5", "t6"]),
        Industry::Trade => Some(&["t1", "t3", "t4"]),
    }
}

/// Static lookup index over reference data
///
/// Immutable for the process lifetime. Constructed through
/// [`Catalog::from_parts`], which validates referential integrity up front.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
    domains: Vec<Domain>,
    chapters: Vec<Chapter>,
}

impl Catalog {
    /// Build a catalog, validating the data set
    ///
    /// # Errors
    /// Returns [`CatalogError`] on duplicate ids, domains referencing a
    /// missing track, or an empty track/chapter list.
    pub fn from_parts(
        tracks: Vec<Track>,
        domains: Vec<Domain>,
        chapters: Vec<Chapter>,
    ) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::EmptyTracks);
        }
        if chapters.is_empty() {
            return Err(CatalogError::EmptyChapters);
        }

        let mut seen = std::collections::HashSet::new();
        for track in &tracks {
            if !seen.insert(track.id.as_str()) {
                return Err(CatalogError::DuplicateTrack(track.id.clone()));
            }
            if !track.icon.is_known() {
                tracing::warn!(track = %track.id, "track icon tag outside the closed set");
            }
        }

        let mut seen = std::collections::HashSet::new();
        for domain in &domains {
            if !seen.insert(domain.id.as_str()) {
                return Err(CatalogError::DuplicateDomain(domain.id.clone()));
            }
            if !tracks.iter().any(|t| t.id == domain.track_id) {
                return Err(CatalogError::OrphanDomain {
                    domain: domain.id.clone(),
                    track: domain.track_id.clone(),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for chapter in &chapters {
            if !seen.insert(chapter.id.as_str()) {
                return Err(CatalogError::DuplicateChapter(chapter.id.clone()));
            }
        }

        Ok(Self {
            tracks,
            domains,
            chapters,
        })
    }

    /// Full track list in catalog order
    #[inline]
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Tracks for an industry segment, preserving catalog order
    ///
    /// `All` returns every track exactly once.
    #[must_use]
    pub fn tracks_for(&self, industry: Industry) -> Vec<&Track> {
        match member_ids(industry) {
            None => self.tracks.iter().collect(),
            Some(ids) => self
                .tracks
                .iter()
                .filter(|t| ids.contains(&t.id.as_str()))
                .collect(),
        }
    }

    /// Domains owned by a track, preserving catalog order
    #[must_use]
    pub fn domains_for(&self, track_id: &str) -> Vec<&Domain> {
        self.domains
            .iter()
            .filter(|d| d.track_id == track_id)
            .collect()
    }

    /// The shared ordered chapter sequence, identical for every domain
    #[inline]
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a track by id
    #[inline]
    #[must_use]
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Look up a domain by id
    #[inline]
    #[must_use]
    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// Look up a chapter by id
    #[inline]
    #[must_use]
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }
}
