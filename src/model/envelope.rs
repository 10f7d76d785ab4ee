//! Listing response envelope

use super::entry::Entry;
use serde::Deserialize;

/// One page of the remote listing.
///
/// Mirrors:
/// ```json
/// {
///   "count": 1302,
///   "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
///   "previous": null,
///   "results": [ { "name": "...", "url": "..." } ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Total items available across all pages
    #[serde(rename = "count")]
    pub total_count: u64,

    /// Pointer to the next page, absent on the last page
    #[serde(rename = "next", default)]
    pub next_cursor: Option<String>,

    /// Pointer to the previous page (kept, never followed)
    #[serde(rename = "previous", default)]
    pub previous_cursor: Option<String>,

    /// Entries in page order
    pub results: Vec<Entry>,
}

impl ResponseEnvelope {
    /// Number of results on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the page has no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether the remote advertises a following page
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }
}
