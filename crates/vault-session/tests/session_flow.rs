//! End-to-end session scenarios.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use vault_catalog::{Chapter, Domain, Industry, PartnerRole};
use vault_content::{ContentError, ContentProvider, GeneratedContent, OfflineProvider};
use vault_progress::{FileStorage, MemoryStorage, ProgressStorage};
use vault_session::{LoadState, Mode, SessionConfig, VaultSession, View};
use vault_test_utils::ScriptedProvider;

mockall::mock! {
    Provider {}

    #[async_trait::async_trait]
    impl ContentProvider for Provider {
        async fn generate(
            &self,
            domain: &Domain,
            chapter: &Chapter,
            role: PartnerRole,
        ) -> Result<GeneratedContent, ContentError>;

        async fn chat(&self, message: &str, context_hint: &str)
            -> Result<String, ContentError>;
    }
}

fn offline_session() -> VaultSession {
    VaultSession::new(
        SessionConfig::default(),
        Arc::new(MemoryStorage::new()),
        Arc::new(OfflineProvider::new()),
    )
}

#[tokio::test]
async fn pitch_to_chapter_walkthrough() {
    let mut session = offline_session();

    // Investor flips through the pitch, drills into the Climate topic.
    assert!(session.toggle_transformation_detail(1));
    assert!(session.cross_mode_drill_down("Climate Volatility & Food Security"));
    assert_eq!(session.nav().mode, Mode::Demo);
    assert_eq!(session.nav().selected_track.as_deref(), Some("t2"));
    assert_eq!(session.nav().industry, Industry::Gov);

    // Opens a chapter of the agroforestry track and reads generated content.
    assert!(session.enter_chapter("d4", "3").is_some());
    assert!(session.refresh_content().await);
    let content = session.content().content().expect("offline content");
    assert!(content.body.contains("Core Methodologies"));
    assert!(!content.key_concepts.is_empty());

    // Marks it complete; 1 of t2's 2x7 chapters is 7%.
    assert_eq!(session.toggle_chapter_complete(), Some(true));
    let snapshot = session.track_progress("t2");
    assert_eq!((snapshot.completed, snapshot.total), (1, 14));
    assert_eq!(snapshot.percentage, 7);

    // Back out to the list; content is gone, progress stays.
    session.go_back();
    session.go_back();
    assert_eq!(session.nav().view, View::TrackList);
    assert_eq!(*session.content(), LoadState::Idle);
    assert_eq!(session.track_progress("t2").completed, 1);
}

#[tokio::test]
async fn chat_context_follows_navigation() {
    let mut mock = MockProvider::new();
    mock.expect_chat()
        .withf(|_, hint| hint.starts_with("Viewing Dashboard as"))
        .times(1)
        .returning(|_, _| Ok("From the dashboard.".to_string()));
    mock.expect_chat()
        .withf(|_, hint| {
            hint == "Analyzing Component: Financial Modeling in Asset Track: \
                     Housing, ADU, and Climate Infrastructure"
        })
        .times(1)
        .returning(|_, _| Ok("About that chapter.".to_string()));
    mock.expect_generate().returning(|_, _, _| {
        Ok(GeneratedContent {
            overview: String::new(),
            key_concepts: vec![],
            role_specific_insight: String::new(),
            deliverables: vec![],
            body: String::new(),
        })
    });

    let mut session = VaultSession::new(
        SessionConfig::default(),
        Arc::new(MemoryStorage::new()),
        Arc::new(mock),
    );

    assert!(session.send_chat("where am I?").await);

    session.switch_mode(Mode::Demo);
    session.enter_track("t4");
    session.enter_chapter("d8", "6");
    assert!(session.send_chat("explain this chapter").await);

    let log = session.chat_log();
    assert_eq!(log.last().map(|m| m.text.as_str()), Some("About that chapter."));
}

#[tokio::test]
async fn scripted_provider_sees_selected_triple() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut session = VaultSession::new(
        SessionConfig::default().with_initial_role(PartnerRole::ProductPackaging),
        Arc::new(MemoryStorage::new()),
        Arc::clone(&provider) as Arc<dyn ContentProvider>,
    );
    session.switch_mode(Mode::Demo);
    session.enter_track("t6");
    let ticket = session.enter_chapter("d12", "2").expect("chapter opens");
    assert!(session.run_fetch(ticket).await);

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].domain_id, "d12");
    assert_eq!(calls[0].chapter_id, "2");
    assert_eq!(calls[0].role, PartnerRole::ProductPackaging);
}

#[tokio::test]
async fn progress_round_trips_through_file_storage() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let mut session = VaultSession::new(
            SessionConfig::default(),
            Arc::new(FileStorage::new(dir.path())) as Arc<dyn ProgressStorage>,
            Arc::new(OfflineProvider::new()),
        );
        session.switch_mode(Mode::Demo);
        session.enter_track("t1");
        session.enter_chapter("d2", "5");
        assert_eq!(session.toggle_chapter_complete(), Some(true));
    }

    let session = VaultSession::new(
        SessionConfig::default(),
        Arc::new(FileStorage::new(dir.path())) as Arc<dyn ProgressStorage>,
        Arc::new(OfflineProvider::new()),
    );
    let snapshot = session.track_progress("t1");
    assert_eq!(snapshot.completed, 1);
    assert_eq!(snapshot.total, 21);
}

#[tokio::test]
async fn chapter_reopen_refetches_instead_of_reusing() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut session = VaultSession::new(
        SessionConfig::default(),
        Arc::new(MemoryStorage::new()),
        Arc::clone(&provider) as Arc<dyn ContentProvider>,
    );
    session.switch_mode(Mode::Demo);
    session.enter_track("t1");

    let first = session.enter_chapter("d1", "1").expect("first open");
    assert!(session.run_fetch(first).await);
    session.go_back();
    assert_eq!(*session.content(), LoadState::Idle);

    let second = session.enter_chapter("d1", "1").expect("second open");
    assert!(session.run_fetch(second).await);
    assert_eq!(provider.calls().len(), 2);
}
