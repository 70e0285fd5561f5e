//! Vault Content - switchable generation backend
//!
//! The content boundary the session core consumes:
//! - [`ContentProvider`] trait: structured generation plus free-text chat
//! - [`OfflineProvider`]: deterministic local generator, no network
//! - [`RemoteProvider`]: JSON gateway client
//!
//! The session must not depend on which backend is behind the trait.
//!
//! # Example
//!
//! ```rust
//! use vault_catalog::{builtin, PartnerRole};
//! use vault_content::{ContentProvider, OfflineProvider};
//!
//! # async fn example() -> Result<(), vault_content::ContentError> {
//! let provider = OfflineProvider::new();
//! let catalog = builtin();
//! let content = provider
//!     .generate(
//!         catalog.domain("d1").unwrap(),
//!         catalog.chapter("1").unwrap(),
//!         PartnerRole::IpDefinition,
//!     )
//!     .await?;
//! assert_eq!(content.key_concepts.len(), 5);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod offline;
pub mod provider;
pub mod remote;
pub mod types;

// Re-exports for convenience
pub use error::ContentError;
pub use offline::OfflineProvider;
pub use provider::ContentProvider;
pub use remote::RemoteProvider;
pub use types::GeneratedContent;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
