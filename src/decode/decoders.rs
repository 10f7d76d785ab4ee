//! Decoder implementations

use super::types::EnvelopeDecoder;
use crate::error::FetchError;
use crate::model::ResponseEnvelope;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON envelope decoder.
///
/// Field names are remapped by the model's serde attributes; fields the model
/// does not know about are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl EnvelopeDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<ResponseEnvelope, FetchError> {
        if body.trim().is_empty() {
            return Err(FetchError::decode("Empty response body"));
        }
        serde_json::from_str(body)
            .map_err(|e| FetchError::decode(format!("Failed to parse JSON: {e}")))
    }
}
