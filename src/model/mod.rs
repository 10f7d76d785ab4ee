//! Domain model module
//!
//! # Overview
//!
//! - `Entry` - one catalog item with derived display name and artwork URL
//! - `ResponseEnvelope` - one decoded page of the remote listing
//!
//! Both types deserialize straight from the listing's JSON shape; unknown
//! fields are ignored so the remote schema can grow without breaking us.

mod entry;
mod envelope;

pub use entry::{Entry, ARTWORK_BASE_URL, FALLBACK_ID};
pub use envelope::ResponseEnvelope;
