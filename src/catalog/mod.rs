//! Catalog aggregation module
//!
//! Assembles successive listing pages into one ordered, deduplicated catalog.
//!
//! # Overview
//!
//! The catalog module provides:
//! - `Catalog` - owns entries, load state and the pagination cursor
//! - `LoadState` - what the presentation layer shows (idle, loading, error)
//! - `LoadOutcome` / `MergeReport` - what a single `load_next_page` call did
//! - `CatalogSnapshot` - a consistent read of everything at once

mod aggregator;
mod types;

pub use aggregator::Catalog;
pub use types::{CatalogSnapshot, LoadOutcome, LoadState, MergeReport};
