//! Page fetching module
//!
//! One call, one page: `PageFetcher` issues a single listing request with an
//! explicit limit/offset, decodes the envelope and classifies failures.
//! It never retries.

mod fetcher;

pub use fetcher::{PageFetcher, DEFAULT_ENDPOINT};
