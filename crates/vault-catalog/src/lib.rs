//! Vault Catalog - static reference data
//!
//! Lookup structure over the platform's immutable reference data:
//! - Tracks, domains, and the shared placeholder chapter sequence
//! - Partner roles and industry segments
//! - Industry-based track filtering with fixed membership sets
//!
//! # Example
//!
//! ```rust
//! use vault_catalog::{builtin, Industry};
//!
//! let catalog = builtin();
//! let gov_tracks = catalog.tracks_for(Industry::Gov);
//! assert!(gov_tracks.iter().any(|t| t.id == "t2"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod catalog;
pub mod data;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use catalog::Catalog;
pub use data::builtin;
pub use error::CatalogError;
pub use types::{Chapter, Domain, IconTag, Industry, PartnerRole, Track};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
