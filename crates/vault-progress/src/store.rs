//! Completion tracking
//!
//! Records which (domain, chapter) pairs have been marked complete and
//! derives per-track progress from the catalog. The completion set is
//! loaded once, mutated by explicit toggles, and persisted after every
//! mutation.

use crate::storage::ProgressStorage;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use vault_catalog::Catalog;

const KEY_SEPARATOR: char = '_';

/// Identifies one (domain, chapter) completion fact
///
/// Completion is tracked independent of track and role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionKey(String);

impl CompletionKey {
    /// Derive the key for a (domain, chapter) pair
    #[inline]
    #[must_use]
    pub fn new(domain_id: &str, chapter_id: &str) -> Self {
        Self(format!("{domain_id}{KEY_SEPARATOR}{chapter_id}"))
    }

    /// The encoded key string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompletionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived per-track progress
///
/// Recomputed on demand, never cached: the completion set can change at
/// any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Completed chapters across the track's domains
    pub completed: usize,
    /// Total chapters: domains in track times chapters per domain
    pub total: usize,
    /// Rounded percentage, 0 when `total` is 0
    pub percentage: u8,
}

impl ProgressSnapshot {
    /// Snapshot with nothing completed
    #[inline]
    #[must_use]
    pub fn empty(total: usize) -> Self {
        Self {
            completed: 0,
            total,
            percentage: 0,
        }
    }
}

/// Durable record of completion facts
pub struct ProgressStore {
    storage: Arc<dyn ProgressStorage>,
    storage_key: String,
    completed: HashSet<CompletionKey>,
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("storage_key", &self.storage_key)
            .field("completed", &self.completed.len())
            .finish()
    }
}

impl ProgressStore {
    /// Load the completion set from storage
    ///
    /// Unavailable or corrupt persisted data degrades to an empty set; the
    /// session starts rather than failing.
    #[must_use]
    pub fn load(storage: Arc<dyn ProgressStorage>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let completed = match storage.load(&storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CompletionKey>>(&raw) {
                Ok(keys) => keys.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(key = %storage_key, error = %e, "corrupt progress data, starting empty");
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                tracing::warn!(key = %storage_key, error = %e, "progress storage unavailable, starting empty");
                HashSet::new()
            }
        };
        Self {
            storage,
            storage_key,
            completed,
        }
    }

    /// Whether a (domain, chapter) pair is marked complete
    #[inline]
    #[must_use]
    pub fn is_complete(&self, domain_id: &str, chapter_id: &str) -> bool {
        self.completed
            .contains(&CompletionKey::new(domain_id, chapter_id))
    }

    /// Number of completion facts recorded
    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Flip completion for a (domain, chapter) pair and persist the set
    ///
    /// Each call flips, so two identical calls cancel out. Returns the new
    /// completion state.
    pub fn toggle(&mut self, domain_id: &str, chapter_id: &str) -> bool {
        let key = CompletionKey::new(domain_id, chapter_id);
        let now_complete = if self.completed.remove(&key) {
            false
        } else {
            self.completed.insert(key);
            true
        };
        self.persist();
        now_complete
    }

    /// Derived progress for a track
    ///
    /// Pure function of the current completion set and the catalog.
    /// `percentage` is standard rounding of `100 * completed / total` and
    /// 0 when the track has no chapters.
    #[must_use]
    pub fn snapshot(&self, track_id: &str, catalog: &Catalog) -> ProgressSnapshot {
        let domains = catalog.domains_for(track_id);
        let chapters = catalog.chapters();
        let total = domains.len() * chapters.len();
        if total == 0 {
            return ProgressSnapshot::empty(0);
        }

        let completed = domains
            .iter()
            .flat_map(|d| chapters.iter().map(move |c| (d, c)))
            .filter(|(d, c)| self.is_complete(&d.id, &c.id))
            .count();

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percentage = ((completed as f64 / total as f64) * 100.0).round() as u8;

        ProgressSnapshot {
            completed,
            total,
            percentage,
        }
    }

    /// Persist the full set, best effort
    ///
    /// A failed write is logged and not reported to the caller.
    fn persist(&self) {
        let mut keys: Vec<&CompletionKey> = self.completed.iter().collect();
        keys.sort();
        match serde_json::to_string(&keys) {
            Ok(encoded) => {
                if let Err(e) = self.storage.save(&self.storage_key, &encoded) {
                    tracing::warn!(key = %self.storage_key, error = %e, "failed to persist progress");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode progress set");
            }
        }
    }
}
