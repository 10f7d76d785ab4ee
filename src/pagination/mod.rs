//! Pagination module
//!
//! # Overview
//!
//! Local offset/limit bookkeeping for one catalog session. The remote's own
//! `next`/`previous` links are only consulted to decide whether another page
//! exists; requests are always built from the cursor's offset.

mod cursor;

pub use cursor::{PageRequest, PaginationCursor, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
