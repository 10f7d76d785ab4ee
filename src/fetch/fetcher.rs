//! Page fetcher

use crate::config::CatalogConfig;
use crate::decode::{EnvelopeDecoder, JsonDecoder};
use crate::error::{FetchError, Result};
use crate::http::{HttpClient, Transport};
use crate::model::ResponseEnvelope;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

/// Listing path, relative to the transport's base URL
pub const DEFAULT_ENDPOINT: &str = "pokemon";

/// Fetches single listing pages through an injected transport and decoder
#[derive(Clone)]
pub struct PageFetcher {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn EnvelopeDecoder>,
    endpoint: String,
}

impl PageFetcher {
    /// Create a fetcher for the default listing endpoint
    pub fn new(transport: Arc<dyn Transport>, decoder: Arc<dyn EnvelopeDecoder>) -> Self {
        Self {
            transport,
            decoder,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Wire an HTTP transport and JSON decoder from config
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(config.http_client_config())?;
        let fetcher = Self::new(Arc::new(client), Arc::new(JsonDecoder));
        Ok(fetcher.with_endpoint(config.endpoint.clone()))
    }

    /// Use a different listing path
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Listing path this fetcher requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one page.
    ///
    /// Entries in the returned envelope have no page assigned; the catalog
    /// does that when it merges them.
    pub async fn fetch_page(
        &self,
        limit: NonZeroU32,
        offset: u32,
    ) -> std::result::Result<ResponseEnvelope, FetchError> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];

        let response = self
            .transport
            .get(&self.endpoint, &query)
            .await
            .inspect_err(|e| warn!(%limit, offset, error = %e, "page request failed"))?;

        if !response.is_success() {
            warn!(%limit, offset, status = response.status, "listing returned error status");
            return Err(FetchError::http(response.status));
        }

        let envelope = self
            .decoder
            .decode(&response.body)
            .inspect_err(|e| warn!(%limit, offset, error = %e, "failed to decode page"))?;

        debug!(
            %limit,
            offset,
            results = envelope.len(),
            total = envelope.total_count,
            has_next = envelope.has_next(),
            "fetched page"
        );

        Ok(envelope)
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
