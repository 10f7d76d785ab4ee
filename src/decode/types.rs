//! Decoder trait

use crate::error::FetchError;
use crate::model::ResponseEnvelope;

/// Trait for decoding listing response bodies
pub trait EnvelopeDecoder: Send + Sync {
    /// Decode one page body into an envelope
    fn decode(&self, body: &str) -> Result<ResponseEnvelope, FetchError>;
}
