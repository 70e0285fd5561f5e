//! Headless walkthrough of the vault session.
//!
//! Drives the same operations the UI would: switch to the demo, filter
//! tracks, open a chapter, generate content, mark progress, and ask the
//! strategist a question.

use std::sync::Arc;

use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;
use vault_catalog::{Industry, PartnerRole};
use vault_content::{ContentProvider, OfflineProvider, RemoteProvider};
use vault_progress::{FileStorage, MemoryStorage, ProgressStorage};
use vault_session::{LoadState, Mode, SessionConfig, VaultSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Command::new("vault-demo")
        .version(vault_session::VERSION)
        .about("Unified Knowledge Vault session walkthrough")
        .arg(
            Arg::new("progress-dir")
                .long("progress-dir")
                .help("Directory for persisted progress (in-memory when omitted)"),
        )
        .arg(
            Arg::new("remote")
                .long("remote")
                .help("Base URL of a content gateway (offline templates when omitted)"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .help("Bearer token for the content gateway"),
        )
        .arg(
            Arg::new("reset")
                .long("reset")
                .action(ArgAction::SetTrue)
                .help("Start with no chapters marked complete"),
        )
        .get_matches();

    let storage: Arc<dyn ProgressStorage> = match cli.get_one::<String>("progress-dir") {
        Some(dir) if !cli.get_flag("reset") => Arc::new(FileStorage::new(dir)),
        _ => Arc::new(MemoryStorage::new()),
    };

    let provider: Arc<dyn ContentProvider> = match cli.get_one::<String>("remote") {
        Some(base_url) => {
            let mut remote = RemoteProvider::new(base_url)?;
            if let Some(key) = cli.get_one::<String>("api-key") {
                remote = remote.with_api_key(key);
            }
            Arc::new(remote)
        }
        None => Arc::new(OfflineProvider::new()),
    };

    let mut session = VaultSession::new(SessionConfig::default(), storage, provider);

    println!("== Pitch deck ==");
    session.toggle_transformation_detail(PartnerRole::ContractualLicensing.index());
    println!(
        "transformation deep dive: {}",
        PartnerRole::ContractualLicensing.stage()
    );

    println!("\n== Drill down from the Workforce topic ==");
    session.cross_mode_drill_down("Workforce Pipeline Collapse");
    let nav = session.nav();
    println!(
        "now in demo, track {} under the {} filter",
        nav.selected_track.as_deref().unwrap_or("-"),
        nav.industry.label()
    );

    println!("\n== Track list under each filter ==");
    session.switch_mode(Mode::Demo);
    session.go_back();
    for industry in Industry::SEGMENTS {
        session.set_industry_filter(industry);
        let titles: Vec<&str> = session
            .filtered_tracks()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        println!("{:>12}: {}", industry.label(), titles.join(" | "));
    }
    session.set_industry_filter(Industry::All);

    println!("\n== Open a chapter and generate content ==");
    session.enter_track("t1");
    if session.enter_chapter("d1", "1").is_some() {
        session.refresh_content().await;
    }
    match session.content() {
        LoadState::Ready(content) => {
            println!("overview: {}", content.overview);
            println!("insight:  {}", content.role_specific_insight);
        }
        LoadState::Failed(msg) => println!("content failed: {msg}"),
        other => println!("unexpected load state: {other:?}"),
    }

    if let Some(now_complete) = session.toggle_chapter_complete() {
        println!("chapter marked complete: {now_complete}");
    }
    let snapshot = session.track_progress("t1");
    println!(
        "track t1 progress: {}/{} ({}%)",
        snapshot.completed, snapshot.total, snapshot.percentage
    );

    println!("\n== Ask the strategist ==");
    session.send_chat("Which track should an investor look at first?").await;
    if let Some(reply) = session.chat_log().last() {
        println!("strategist: {}", reply.text);
    }

    Ok(())
}
