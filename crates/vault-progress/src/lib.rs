//! Vault Progress - completion tracking
//!
//! Durable record of which (domain, chapter) pairs are complete:
//! - `ProgressStore` loads once, toggles explicitly, persists every mutation
//! - `ProgressStorage` is the key-value persistence boundary
//! - `ProgressSnapshot` is derived per track, recomputed on demand
//!
//! Load failures degrade to an empty set and save failures are fire and
//! forget; neither is fatal.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use error::StorageError;
pub use storage::{FileStorage, MemoryStorage, ProgressStorage};
pub use store::{CompletionKey, ProgressSnapshot, ProgressStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
