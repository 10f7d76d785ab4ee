//! Offset cursor

use crate::model::ResponseEnvelope;
use std::num::NonZeroU32;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(size) => size,
    None => unreachable!(),
};

/// Parameters for the next listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page size
    pub limit: NonZeroU32,
    /// Items to skip
    pub offset: u32,
}

/// Tracks how far through the listing a session has got.
///
/// Mutated only after a successful fetch, so a failed request can be repeated
/// with the same parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    limit: NonZeroU32,
    pub(super) offset: u32,
    has_more: bool,
}

impl PaginationCursor {
    /// Create a cursor at the start of the listing
    pub fn new(limit: NonZeroU32) -> Self {
        Self {
            limit,
            offset: 0,
            has_more: true,
        }
    }

    /// Page size, fixed for the session
    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Items consumed so far
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Whether another page may be requested
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether the listing has been fully consumed
    pub fn is_exhausted(&self) -> bool {
        !self.has_more
    }

    /// Parameters for the next request, or `None` once exhausted
    pub fn next_request_params(&self) -> Option<PageRequest> {
        self.has_more.then_some(PageRequest {
            limit: self.limit,
            offset: self.offset,
        })
    }

    /// Move past a successfully fetched page.
    ///
    /// An empty page ends pagination even if the remote still sends a `next`
    /// link, otherwise the offset would never move.
    pub fn advance(&mut self, envelope: &ResponseEnvelope) {
        let fetched = u32::try_from(envelope.len()).unwrap_or(u32::MAX);
        self.offset = self.offset.saturating_add(fetched);
        self.has_more = envelope.has_next() && fetched > 0;
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.offset = 0;
        self.has_more = true;
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
