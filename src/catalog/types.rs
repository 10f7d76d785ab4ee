//! Catalog types

use crate::error::FetchError;
use crate::model::Entry;
use serde_json::{json, Value};

/// Loading status of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet, or just reset
    #[default]
    Idle,
    /// A page request is in flight
    Loading,
    /// Last request succeeded (more pages may still exist)
    Loaded,
    /// Last request failed; the same page will be requested again
    Error(FetchError),
}

impl LoadState {
    /// Check if a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the last request failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The failure behind an error state
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Short lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error(_) => "error",
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(e) => write!(f, "error: {e}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Summary of one merged page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Page index assigned to the new entries
    pub page: u32,
    /// Results on the fetched page
    pub fetched: usize,
    /// Entries appended to the catalog
    pub added: usize,
    /// Results skipped because the catalog already had them
    pub duplicates: usize,
    /// Whether another page may be requested
    pub has_more: bool,
}

/// What a `load_next_page` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Another call was already loading; nothing was requested
    AlreadyLoading,
    /// No more pages; nothing was requested
    Exhausted,
    /// A page was fetched and merged
    Merged(MergeReport),
    /// The catalog was reset while the request was in flight; result dropped
    Discarded,
}

impl LoadOutcome {
    /// The merge report, if a page was merged
    pub fn merged(&self) -> Option<&MergeReport> {
        match self {
            Self::Merged(report) => Some(report),
            _ => None,
        }
    }

    /// Check if a request was issued and merged
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }
}

/// A consistent view of a catalog
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Entries in first-fetched order
    pub entries: Vec<Entry>,
    /// Current load state
    pub load_state: LoadState,
    /// Whether another page may be requested
    pub has_more: bool,
    /// Pages merged so far
    pub pages_loaded: u32,
    /// Total reported by the most recent page, if any page was fetched
    pub total_count: Option<u64>,
}

impl CatalogSnapshot {
    /// JSON view for output
    pub fn to_json(&self) -> Value {
        json!({
            "entries": self.entries.iter().map(Entry::to_json).collect::<Vec<_>>(),
            "load_state": self.load_state.to_string(),
            "has_more": self.has_more,
            "pages_loaded": self.pages_loaded,
            "total_count": self.total_count,
        })
    }
}
