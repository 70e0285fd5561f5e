//! Session facade tying catalog, navigation, progress, content and chat
//! together.
//!
//! [`VaultSession`] is the single entry point a frontend drives. It owns the
//! sub-systems and sequences them: opening a chapter starts a content fetch,
//! leaving the content view cancels it, chat messages are stamped with the
//! current navigation context.

use std::sync::Arc;

use tracing::info;
use vault_catalog::{Catalog, Industry, PartnerRole, Track};
use vault_content::{ContentError, ContentProvider, GeneratedContent};
use vault_progress::{ProgressSnapshot, ProgressStorage, ProgressStore};

use crate::chat::{ChatMessage, ChatSession};
use crate::config::SessionConfig;
use crate::loader::{ContentKey, ContentLoader, FetchTicket, LoadState};
use crate::nav::{Mode, NavigationController, NavigationState, View};

/// One user's session over the vault.
pub struct VaultSession {
    catalog: Catalog,
    nav: NavigationController,
    progress: ProgressStore,
    loader: ContentLoader,
    chat: ChatSession,
    provider: Arc<dyn ContentProvider>,
}

impl std::fmt::Debug for VaultSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSession")
            .field("nav", self.nav.state())
            .field("content", self.loader.state())
            .finish_non_exhaustive()
    }
}

impl VaultSession {
    /// Session over the builtin catalog.
    ///
    /// Progress is loaded from `storage` immediately; a missing or corrupt
    /// record starts the session with no chapters complete.
    #[must_use]
    pub fn new(
        config: SessionConfig,
        storage: Arc<dyn ProgressStorage>,
        provider: Arc<dyn ContentProvider>,
    ) -> Self {
        Self::with_catalog(config, vault_catalog::builtin().clone(), storage, provider)
    }

    /// Session over a caller-supplied catalog.
    #[must_use]
    pub fn with_catalog(
        config: SessionConfig,
        catalog: Catalog,
        storage: Arc<dyn ProgressStorage>,
        provider: Arc<dyn ContentProvider>,
    ) -> Self {
        let progress = ProgressStore::load(storage, &config.storage_key);
        let mut nav = NavigationController::new();
        nav.set_role(config.initial_role);
        nav.set_industry_filter(config.initial_industry);
        info!(
            tracks = catalog.tracks().len(),
            completed = progress.completed_count(),
            "vault session started"
        );
        Self {
            catalog,
            nav,
            progress,
            loader: ContentLoader::new(),
            chat: ChatSession::new(),
            provider,
        }
    }

    /// Current navigation state.
    #[inline]
    #[must_use]
    pub fn nav(&self) -> &NavigationState {
        self.nav.state()
    }

    /// The catalog this session browses.
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lifecycle of the chapter content being displayed.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &LoadState {
        self.loader.state()
    }

    /// Chat transcript, oldest first.
    #[inline]
    #[must_use]
    pub fn chat_log(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    /// Whether a chat reply is pending.
    #[inline]
    #[must_use]
    pub fn chat_loading(&self) -> bool {
        self.chat.is_loading()
    }

    /// Tracks visible under the active industry filter, in catalog order.
    #[must_use]
    pub fn filtered_tracks(&self) -> Vec<&Track> {
        self.catalog.tracks_for(self.nav.state().industry)
    }

    /// Completion snapshot for one track.
    #[must_use]
    pub fn track_progress(&self, track_id: &str) -> ProgressSnapshot {
        self.progress.snapshot(track_id, &self.catalog)
    }

    /// Whether the currently open chapter is marked complete.
    #[must_use]
    pub fn current_chapter_complete(&self) -> bool {
        let state = self.nav.state();
        match (&state.selected_domain, &state.selected_chapter) {
            (Some(domain), Some(chapter)) => self.progress.is_complete(domain, chapter),
            _ => false,
        }
    }

    /// Opens a track from the track list.
    pub fn enter_track(&mut self, track_id: &str) -> bool {
        self.nav.enter_track(&self.catalog, track_id)
    }

    /// Opens a chapter and starts fetching its content.
    ///
    /// Returns the fetch ticket when the navigation applied, to be driven
    /// via [`Self::run_fetch`] or completed manually.
    pub fn enter_chapter(&mut self, domain_id: &str, chapter_id: &str) -> Option<FetchTicket> {
        if !self.nav.enter_chapter(&self.catalog, domain_id, chapter_id) {
            return None;
        }
        self.begin_content_load()
    }

    /// Steps one level back, cancelling any content fetch the departed view
    /// owned.
    pub fn go_back(&mut self) {
        self.nav.go_back();
        self.sync_loader();
    }

    /// Switches between pitch and demo surfaces.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.nav.switch_mode(mode);
        self.sync_loader();
    }

    /// Jumps from a pitch topic card into the demo.
    pub fn cross_mode_drill_down(&mut self, topic_label: &str) -> bool {
        let applied = self.nav.cross_mode_drill_down(&self.catalog, topic_label);
        if applied {
            self.sync_loader();
        }
        applied
    }

    /// Sets the industry filter (track list only).
    pub fn set_industry_filter(&mut self, industry: Industry) -> bool {
        self.nav.set_industry_filter(industry)
    }

    /// Changes the role lens.
    ///
    /// When a chapter is open its content is regenerated for the new role;
    /// the returned ticket drives that fetch.
    pub fn set_role(&mut self, role: PartnerRole) -> Option<FetchTicket> {
        self.nav.set_role(role);
        if self.nav.state().view == View::ChapterContent {
            self.begin_content_load()
        } else {
            None
        }
    }

    /// Opens the pitch problem/solution deep dive.
    pub fn open_problem_deep_dive(&mut self) -> bool {
        self.nav.open_problem_deep_dive()
    }

    /// Toggles the pitch transformation deep dive on a stage.
    pub fn toggle_transformation_detail(&mut self, index: usize) -> bool {
        self.nav.toggle_transformation_detail(index)
    }

    /// Toggles completion of the open chapter and persists it.
    ///
    /// Returns the new completion state, or `None` when no chapter is open.
    pub fn toggle_chapter_complete(&mut self) -> Option<bool> {
        let state = self.nav.state();
        let (domain, chapter) = match (&state.selected_domain, &state.selected_chapter) {
            (Some(d), Some(c)) => (d.clone(), c.clone()),
            _ => return None,
        };
        Some(self.progress.toggle(&domain, &chapter))
    }

    /// Starts (or restarts) the fetch for the open chapter.
    ///
    /// `None` when no chapter is open.
    pub fn begin_content_load(&mut self) -> Option<FetchTicket> {
        let key = self.current_content_key()?;
        Some(self.loader.begin(key))
    }

    /// Delivers a fetch result; stale tickets are dropped.
    pub fn complete_content_load(
        &mut self,
        ticket: FetchTicket,
        result: Result<GeneratedContent, ContentError>,
    ) -> bool {
        self.loader.complete(ticket, result)
    }

    /// Runs the provider call for a ticket and delivers the result.
    ///
    /// Returns whether the result was applied; a fetch superseded while in
    /// flight reports `false`.
    pub async fn run_fetch(&mut self, ticket: FetchTicket) -> bool {
        let key = ticket.key();
        let Some(domain) = self.catalog.domain(&key.domain_id).cloned() else {
            return false;
        };
        let Some(chapter) = self.catalog.chapter(&key.chapter_id).cloned() else {
            return false;
        };
        let role = key.role;
        let provider = Arc::clone(&self.provider);
        let result = provider.generate(&domain, &chapter, role).await;
        self.loader.complete(ticket, result)
    }

    /// Fetches content for the open chapter end to end.
    ///
    /// Convenience over [`Self::begin_content_load`] + [`Self::run_fetch`]
    /// for drivers without concurrent navigation.
    pub async fn refresh_content(&mut self) -> bool {
        let Some(ticket) = self.begin_content_load() else {
            return false;
        };
        self.run_fetch(ticket).await
    }

    /// Sends a chat message stamped with the current navigation context.
    pub async fn send_chat(&mut self, text: &str) -> bool {
        let hint = self.context_hint();
        let provider = Arc::clone(&self.provider);
        self.chat.send(provider.as_ref(), text, &hint).await
    }

    /// One-line description of where the user is, given to the strategist.
    #[must_use]
    pub fn context_hint(&self) -> String {
        let state = self.nav.state();
        let located = state.selected_chapter.as_deref().and_then(|chapter_id| {
            let chapter = self.catalog.chapter(chapter_id)?;
            let track = self
                .catalog
                .track(state.selected_track.as_deref().unwrap_or_default())?;
            Some(format!(
                "Analyzing Component: {} in Asset Track: {}",
                chapter.title, track.title
            ))
        });
        located.unwrap_or_else(|| {
            format!("Viewing Dashboard as {}", state.role.stage())
        })
    }

    fn current_content_key(&self) -> Option<ContentKey> {
        let state = self.nav.state();
        if state.view != View::ChapterContent {
            return None;
        }
        Some(ContentKey {
            domain_id: state.selected_domain.clone()?,
            chapter_id: state.selected_chapter.clone()?,
            role: state.role,
        })
    }

    /// Drops loader state once navigation has left the content view.
    fn sync_loader(&mut self) {
        if self.nav.state().view != View::ChapterContent && self.loader.target().is_some() {
            self.loader.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vault_progress::MemoryStorage;
    use vault_test_utils::ScriptedProvider;

    fn session() -> (VaultSession, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::new());
        let session = VaultSession::new(
            SessionConfig::default(),
            Arc::new(MemoryStorage::new()),
            Arc::clone(&provider) as Arc<dyn ContentProvider>,
        );
        (session, provider)
    }

    fn open_chapter(session: &mut VaultSession) -> FetchTicket {
        session.switch_mode(Mode::Demo);
        assert!(session.enter_track("t1"));
        session.enter_chapter("d1", "1").expect("chapter opens")
    }

    #[test]
    fn filtered_tracks_follow_the_industry_filter() {
        let (mut session, _) = session();
        session.switch_mode(Mode::Demo);
        assert_eq!(session.filtered_tracks().len(), 8);
        assert!(session.set_industry_filter(Industry::HigherEd));
        let ids: Vec<&str> = session
            .filtered_tracks()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["t1", "t2", "t6", "t8"]);
    }

    #[tokio::test]
    async fn opening_a_chapter_fetches_its_content() {
        let (mut session, provider) = session();
        let ticket = open_chapter(&mut session);
        assert_eq!(*session.content(), LoadState::Loading);
        assert!(session.run_fetch(ticket).await);
        assert!(session.content().content().is_some());
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].domain_id, "d1");
        assert_eq!(calls[0].chapter_id, "1");
    }

    #[tokio::test]
    async fn role_change_in_content_view_refetches() {
        let (mut session, provider) = session();
        let first = open_chapter(&mut session);
        assert!(session.run_fetch(first).await);

        let second = session
            .set_role(PartnerRole::ContractualLicensing)
            .expect("refetch starts");
        assert_eq!(*session.content(), LoadState::Loading);
        assert!(session.run_fetch(second).await);
        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].role, PartnerRole::ContractualLicensing);
    }

    #[tokio::test]
    async fn role_change_outside_content_view_does_not_fetch() {
        let (mut session, provider) = session();
        session.switch_mode(Mode::Demo);
        assert!(session.set_role(PartnerRole::LegalStructuring).is_none());
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn leaving_content_view_discards_in_flight_fetch() {
        let (mut session, _) = session();
        let ticket = open_chapter(&mut session);
        session.go_back();
        assert_eq!(*session.content(), LoadState::Idle);
        // The fetch lands after navigation left; it must not resurface.
        assert!(!session.run_fetch(ticket).await);
        assert_eq!(*session.content(), LoadState::Idle);
    }

    #[tokio::test]
    async fn stale_fetch_loses_to_newer_one() {
        let (mut session, _) = session();
        let slow = open_chapter(&mut session);
        let fast = session
            .set_role(PartnerRole::InstitutionalEmbedding)
            .expect("second fetch");
        assert!(session.run_fetch(fast).await);
        let shown = session.content().content().expect("content ready").clone();
        assert!(!session.run_fetch(slow).await);
        assert_eq!(session.content().content(), Some(&shown));
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_failure_state() {
        let provider = Arc::new(ScriptedProvider::failing_generate());
        let mut session = VaultSession::new(
            SessionConfig::default(),
            Arc::new(MemoryStorage::new()),
            provider as Arc<dyn ContentProvider>,
        );
        let ticket = open_chapter(&mut session);
        assert!(session.run_fetch(ticket).await);
        assert!(matches!(session.content(), LoadState::Failed(_)));
    }

    #[test]
    fn toggle_chapter_complete_requires_open_chapter() {
        let (mut session, _) = session();
        assert_eq!(session.toggle_chapter_complete(), None);
        let _ = open_chapter(&mut session);
        assert_eq!(session.toggle_chapter_complete(), Some(true));
        assert!(session.current_chapter_complete());
        assert_eq!(session.toggle_chapter_complete(), Some(false));
    }

    #[test]
    fn track_progress_counts_only_that_track() {
        let (mut session, _) = session();
        let _ = open_chapter(&mut session);
        session.toggle_chapter_complete();
        let snapshot = session.track_progress("t1");
        assert_eq!(snapshot.completed, 1);
        // t1 has 3 domains x 7 chapters.
        assert_eq!(snapshot.total, 21);
        assert_eq!(snapshot.percentage, 5);
        assert_eq!(session.track_progress("t2").completed, 0);
    }

    #[test]
    fn context_hint_names_open_chapter_and_track() {
        let (mut session, _) = session();
        assert!(session.context_hint().starts_with("Viewing Dashboard as"));
        let _ = open_chapter(&mut session);
        assert_eq!(
            session.context_hint(),
            "Analyzing Component: Scope & Definitions in Asset Track: Foundations of Regenerative Land Systems"
        );
    }

    #[tokio::test]
    async fn send_chat_uses_current_context() {
        let (mut session, _) = session();
        assert!(session.send_chat("what should I study first?").await);
        let log = session.chat_log();
        assert_eq!(log.len(), 3);
        assert_eq!(log[2].text, "scripted reply");
    }

    #[test]
    fn drill_down_lands_in_filtered_track_detail() {
        let (mut session, _) = session();
        assert!(session.cross_mode_drill_down("Climate Volatility"));
        let nav = session.nav();
        assert_eq!(nav.mode, Mode::Demo);
        assert_eq!(nav.view, View::TrackDetail);
        assert_eq!(nav.selected_track.as_deref(), Some("t2"));
        assert_eq!(nav.industry, Industry::Gov);
    }

    #[test]
    fn progress_survives_a_new_session_on_shared_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let provider = Arc::new(ScriptedProvider::new());
        {
            let mut session = VaultSession::new(
                SessionConfig::default(),
                Arc::clone(&storage) as Arc<dyn ProgressStorage>,
                Arc::clone(&provider) as Arc<dyn ContentProvider>,
            );
            session.switch_mode(Mode::Demo);
            session.enter_track("t1");
            session.enter_chapter("d1", "1");
            session.toggle_chapter_complete();
        }
        let session = VaultSession::new(
            SessionConfig::default(),
            storage as Arc<dyn ProgressStorage>,
            provider as Arc<dyn ContentProvider>,
        );
        assert_eq!(session.track_progress("t1").completed, 1);
    }
}
