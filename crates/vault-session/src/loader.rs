//! Content load lifecycle with a stale-response guard.
//!
//! The UI shows content for exactly one (domain, chapter, role) triple at a
//! time, but fetches are async and can land out of order. [`ContentLoader`]
//! stamps every fetch with a generation number: starting a new fetch (or
//! leaving the content view) bumps the generation, and a completion whose
//! ticket carries an older generation is discarded.

use tracing::debug;
use vault_catalog::PartnerRole;
use vault_content::{ContentError, GeneratedContent};

/// The triple a content fetch is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    /// Domain the chapter belongs to.
    pub domain_id: String,
    /// Chapter being generated.
    pub chapter_id: String,
    /// Role lens the content is written for.
    pub role: PartnerRole,
}

/// Where the currently displayed content is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No chapter open.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Content arrived and is current.
    Ready(GeneratedContent),
    /// The most recent fetch failed.
    Failed(String),
}

impl Default for LoadState {
    fn default() -> Self {
        Self::Idle
    }
}

impl LoadState {
    /// The content, if any is ready.
    #[inline]
    #[must_use]
    pub fn content(&self) -> Option<&GeneratedContent> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }
}

/// Proof that a fetch was started; required to deliver its result.
///
/// Deliberately not `Clone`: one ticket, one completion.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    key: ContentKey,
}

impl FetchTicket {
    /// The triple this fetch is for.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &ContentKey {
        &self.key
    }
}

/// Tracks the in-flight fetch and discards stale completions.
#[derive(Debug, Default)]
pub struct ContentLoader {
    generation: u64,
    state: LoadState,
    target: Option<ContentKey>,
}

impl ContentLoader {
    /// Loader with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Triple of the fetch currently in flight or displayed.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<&ContentKey> {
        self.target.as_ref()
    }

    /// Starts a fetch for `key`, invalidating any fetch still in flight.
    pub fn begin(&mut self, key: ContentKey) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.target = Some(key.clone());
        debug!(
            generation = self.generation,
            domain = %key.domain_id,
            chapter = %key.chapter_id,
            "content fetch started"
        );
        FetchTicket {
            generation: self.generation,
            key,
        }
    }

    /// Delivers a fetch result.
    ///
    /// If a newer fetch has started (or the loader was reset) since the
    /// ticket was issued, the result is dropped and `false` is returned.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<GeneratedContent, ContentError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "stale content fetch discarded"
            );
            return false;
        }
        self.state = match result {
            Ok(content) => LoadState::Ready(content),
            Err(err) => {
                debug!(error = %err, "content fetch failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    /// Clears the loader when the content view closes.
    ///
    /// Also bumps the generation so a fetch still in flight cannot deliver
    /// into the cleared state.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
        self.target = None;
    }
}
