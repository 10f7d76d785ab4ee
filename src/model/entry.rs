//! Catalog entry
//!
//! One item of the listing, as received:
//! `{ "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }`

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::hash::{Hash, Hasher};

/// Base path of the official artwork sprites
pub const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/";

/// Id used when a source URL has no numeric trailing segment
pub const FALLBACK_ID: &str = "0";

/// One catalog item.
///
/// `display_name` and `image_url` are computed from the stored raw fields on
/// every read. Equality and hashing only look at `raw_name`; the page an entry
/// was first seen on is provenance, not identity.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// Page the entry was first merged on, set once by the catalog
    #[serde(skip)]
    page: Option<u32>,

    /// Name as received (lowercase)
    #[serde(rename = "name")]
    raw_name: String,

    /// Resource URL, ending in `/<id>/`
    #[serde(rename = "url")]
    source_url: String,
}

impl Entry {
    /// Create an entry with no page assigned yet
    pub fn new(raw_name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            page: None,
            raw_name: raw_name.into(),
            source_url: source_url.into(),
        }
    }

    /// Zero-based page this entry was first retrieved on (0 until assigned)
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    /// Whether the catalog has assigned a page yet
    pub fn has_page(&self) -> bool {
        self.page.is_some()
    }

    /// Assign the page index. Only the first call succeeds.
    pub fn assign_page(&mut self, page: u32) -> Result<()> {
        if let Some(existing) = self.page {
            return Err(Error::PageAlreadyAssigned {
                name: self.raw_name.clone(),
                page: existing,
            });
        }
        self.page = Some(page);
        Ok(())
    }

    /// Name as received from the listing
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Resource URL as received from the listing
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Name with its first character upper-cased
    pub fn display_name(&self) -> String {
        let mut chars = self.raw_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Numeric id parsed from the source URL, or [`FALLBACK_ID`].
    ///
    /// Drops the segment after the last `/` (empty for well-formed URLs) and
    /// takes the one before it. Only an all-digit segment counts as an id: a
    /// name segment such as `.../pokemon/pikachu/` gives the fallback, not
    /// `pikachu`.
    pub fn id(&self) -> &str {
        let mut segments = self.source_url.split('/');
        segments.next_back();
        match segments.next_back() {
            Some(id) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => id,
            _ => FALLBACK_ID,
        }
    }

    /// Official artwork URL for this entry
    pub fn image_url(&self) -> String {
        format!("{ARTWORK_BASE_URL}{}.png", self.id())
    }

    /// JSON view including the derived fields
    pub fn to_json(&self) -> Value {
        json!({
            "page": self.page(),
            "name": self.raw_name,
            "url": self.source_url,
            "display_name": self.display_name(),
            "image_url": self.image_url(),
        })
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.raw_name == other.raw_name
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_name.hash(state);
    }
}
