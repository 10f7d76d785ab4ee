//! # Pokedex Catalog
//!
//! Fetches a paginated remote listing, maps each item into an [`Entry`] with
//! derived display fields, and assembles the pages into one ordered,
//! deduplicated catalog that grows one page at a time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokedex_catalog::{Catalog, CatalogConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let catalog = Catalog::from_config(&CatalogConfig::default())?;
//!
//!     // "load more" until the listing runs out
//!     while catalog.has_more().await {
//!         catalog.load_next_page().await?;
//!     }
//!
//!     for entry in catalog.entries().await {
//!         println!("{} {}", entry.display_name(), entry.image_url());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  presentation ──► Catalog ──► PaginationCursor   (limit, offset, has_more)
//!                      │
//!                      ▼
//!                 PageFetcher ──► Transport (HttpClient)
//!                      │
//!                      ▼
//!               EnvelopeDecoder (JsonDecoder) ──► ResponseEnvelope { Entry, .. }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Catalog entries and response envelopes
pub mod model;

/// HTTP transport
pub mod http;

/// Response decoders
pub mod decode;

/// Single-page fetching
pub mod fetch;

/// Offset/limit cursor
pub mod pagination;

/// Page aggregation
pub mod catalog;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{Catalog, CatalogSnapshot, LoadOutcome, LoadState, MergeReport};
pub use config::CatalogConfig;
pub use error::{Error, FetchError, Result};
pub use fetch::PageFetcher;
pub use model::{Entry, ResponseEnvelope};
pub use pagination::{PageRequest, PaginationCursor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
