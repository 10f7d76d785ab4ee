//! Catalog aggregator

use super::types::{CatalogSnapshot, LoadOutcome, LoadState, MergeReport};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::model::{Entry, ResponseEnvelope};
use crate::pagination::PaginationCursor;
use std::collections::HashSet;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Mutable catalog state, guarded as one unit
#[derive(Debug)]
struct CatalogState {
    entries: Vec<Entry>,
    seen: HashSet<String>,
    load_state: LoadState,
    cursor: PaginationCursor,
    pages_merged: u32,
    total_count: Option<u64>,
    /// Bumped by `reset`; a fetch started under an older generation is stale
    generation: u64,
}

impl CatalogState {
    fn new(page_size: NonZeroU32) -> Self {
        Self {
            entries: Vec::new(),
            seen: HashSet::new(),
            load_state: LoadState::Idle,
            cursor: PaginationCursor::new(page_size),
            pages_merged: 0,
            total_count: None,
            generation: 0,
        }
    }

    fn merge(&mut self, envelope: ResponseEnvelope) -> MergeReport {
        let page = self.pages_merged;
        let fetched = envelope.len();
        self.cursor.advance(&envelope);
        self.total_count = Some(envelope.total_count);

        let mut added = 0;
        for mut entry in envelope.results {
            if !self.seen.insert(entry.raw_name().to_string()) {
                continue;
            }
            if let Err(e) = entry.assign_page(page) {
                warn!(error = %e, "keeping page assigned before merge");
            }
            self.entries.push(entry);
            added += 1;
        }

        self.pages_merged += 1;
        self.load_state = LoadState::Loaded;

        MergeReport {
            page,
            fetched,
            added,
            duplicates: fetched - added,
            has_more: self.cursor.has_more(),
        }
    }

    fn abandon_load(&mut self) {
        if self.load_state.is_loading() {
            self.load_state = LoadState::Idle;
            debug!(generation = self.generation, "page load cancelled");
        }
    }
}

/// Held across the fetch; if the load future is dropped before it settles,
/// `Loading` is cleared so later loads are not refused forever.
///
/// Only one load can be in flight, so a `Loading` state seen on drop always
/// belongs to the guard's own load.
struct InFlight {
    state: Arc<RwLock<CatalogState>>,
    armed: bool,
}

impl InFlight {
    fn new(state: Arc<RwLock<CatalogState>>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Ok(mut state) = self.state.try_write() {
            state.abandon_load();
            return;
        }
        // lock is busy; finish on the runtime
        let state = Arc::clone(&self.state);
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { state.write().await.abandon_load() });
            }
            Err(_) => warn!("page load dropped outside a runtime; catalog left loading"),
        }
    }
}

/// Ordered, deduplicated catalog assembled page by page.
///
/// Cloning yields another handle to the same catalog. Independent catalogs
/// share nothing.
#[derive(Debug, Clone)]
pub struct Catalog {
    fetcher: PageFetcher,
    state: Arc<RwLock<CatalogState>>,
}

impl Catalog {
    /// Create an empty catalog that fetches `page_size` entries per page
    pub fn new(fetcher: PageFetcher, page_size: NonZeroU32) -> Self {
        Self {
            fetcher,
            state: Arc::new(RwLock::new(CatalogState::new(page_size))),
        }
    }

    /// Create a catalog over the HTTP listing described by `config`
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let fetcher = PageFetcher::from_config(config)?;
        Ok(Self::new(fetcher, config.page_size()?))
    }

    /// Fetch and merge the next page.
    ///
    /// At most one request is in flight per catalog: a call made while
    /// another is loading returns [`LoadOutcome::AlreadyLoading`] without
    /// touching anything. On failure the load state becomes
    /// [`LoadState::Error`], entries and cursor stay as they were, and the
    /// error is returned; calling again retries the same page.
    ///
    /// Dropping the returned future mid-fetch (a timeout, `select!`, or an
    /// aborted task) returns the catalog to [`LoadState::Idle`].
    pub async fn load_next_page(&self) -> Result<LoadOutcome> {
        let (request, generation, in_flight) = {
            let mut state = self.state.write().await;
            if state.load_state.is_loading() {
                debug!("page load already in flight");
                return Ok(LoadOutcome::AlreadyLoading);
            }
            let Some(request) = state.cursor.next_request_params() else {
                state.load_state = LoadState::Loaded;
                debug!(entries = state.entries.len(), "catalog exhausted");
                return Ok(LoadOutcome::Exhausted);
            };
            state.load_state = LoadState::Loading;
            let in_flight = InFlight::new(Arc::clone(&self.state));
            (request, state.generation, in_flight)
        };

        let result = self.fetcher.fetch_page(request.limit, request.offset).await;

        let mut state = self.state.write().await;
        in_flight.disarm();
        if state.generation != generation {
            state.load_state = LoadState::Idle;
            debug!(offset = request.offset, "dropping page fetched before reset");
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok(envelope) => {
                let report = state.merge(envelope);
                debug!(
                    page = report.page,
                    added = report.added,
                    duplicates = report.duplicates,
                    has_more = report.has_more,
                    "merged page"
                );
                Ok(LoadOutcome::Merged(report))
            }
            Err(e) => {
                warn!(offset = request.offset, error = %e, "page load failed");
                state.load_state = LoadState::Error(e.clone());
                Err(e.into())
            }
        }
    }

    /// Drop all entries and start again from the first page.
    ///
    /// A request already in flight is left to finish and its result is
    /// dropped; the catalog reads as loading until then, or until that load
    /// is cancelled.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.seen.clear();
        state.cursor.reset();
        state.pages_merged = 0;
        state.total_count = None;
        state.generation += 1;
        if !state.load_state.is_loading() {
            state.load_state = LoadState::Idle;
        }
        debug!("catalog reset");
    }

    /// Entries in first-fetched order
    pub async fn entries(&self) -> Vec<Entry> {
        self.state.read().await.entries.clone()
    }

    /// Number of entries
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Check if the catalog is empty
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Current load state
    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load_state.clone()
    }

    /// Whether another page may be requested
    pub async fn has_more(&self) -> bool {
        self.state.read().await.cursor.has_more()
    }

    /// Copy of the pagination cursor
    pub async fn cursor(&self) -> PaginationCursor {
        self.state.read().await.cursor.clone()
    }

    /// Everything at once, read under a single lock
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().await;
        CatalogSnapshot {
            entries: state.entries.clone(),
            load_state: state.load_state.clone(),
            has_more: state.cursor.has_more(),
            pages_loaded: state.pages_merged,
            total_count: state.total_count,
        }
    }
}
