//! Response decoder module
//!
//! # Overview
//!
//! Turns a listing response body into a `ResponseEnvelope`. The page fetcher
//! only sees the `EnvelopeDecoder` trait, so the codec is injected alongside
//! the transport.

mod decoders;
mod types;

pub use decoders::JsonDecoder;
pub use types::EnvelopeDecoder;
