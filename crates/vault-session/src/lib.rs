//! Session core for the unified knowledge vault.
//!
//! This crate is the headless equivalent of the vault's single-page UI:
//! navigation between the pitch deck and the demo platform, the content load
//! lifecycle, chat, and progress tracking, all behind one [`VaultSession`]
//! facade.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vault_content::OfflineProvider;
//! use vault_progress::MemoryStorage;
//! use vault_session::{Mode, SessionConfig, VaultSession};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut session = VaultSession::new(
//!     SessionConfig::default(),
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(OfflineProvider::new()),
//! );
//! session.switch_mode(Mode::Demo);
//! session.enter_track("t1");
//! if session.enter_chapter("d1", "1").is_some() {
//!     session.refresh_content().await;
//! }
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod chat;
pub mod config;
pub mod loader;
pub mod nav;
pub mod session;

// Re-export the primary types
pub use chat::{ChatMessage, ChatSession, Speaker, FALLBACK_REPLY, WELCOME_MESSAGE};
pub use config::{SessionConfig, DEFAULT_STORAGE_KEY};
pub use loader::{ContentKey, ContentLoader, FetchTicket, LoadState};
pub use nav::{Mode, NavigationController, NavigationState, PitchSubState, View};
pub use session::VaultSession;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
