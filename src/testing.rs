//! In-memory listing used by unit tests

use crate::error::FetchError;
use crate::http::{Transport, TransportResponse};
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Serves `total` generated entries by limit/offset, with optional scripted
/// responses and failures taking priority.
#[derive(Debug, Default)]
pub struct FakeListing {
    total: u32,
    delay: Option<Duration>,
    scripted: Mutex<VecDeque<Result<TransportResponse, FetchError>>>,
    requests: Mutex<Vec<(u32, u32)>>,
}

impl FakeListing {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a response for the next request
    pub fn push(&self, response: Result<TransportResponse, FetchError>) {
        self.scripted.lock().unwrap().push_back(response);
    }

    /// Queue a 200 response with the given body
    pub fn push_body(&self, body: serde_json::Value) {
        self.push(Ok(TransportResponse::new(200, body.to_string())));
    }

    /// (limit, offset) of every request seen so far
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn page_body(&self, limit: u32, offset: u32) -> String {
        let end = offset.saturating_add(limit).min(self.total);
        let results: Vec<_> = (offset.min(end)..end).map(|i| entry_json(i + 1)).collect();
        let next = (end < self.total)
            .then(|| format!("https://pokeapi.co/api/v2/pokemon?offset={end}&limit={limit}"));
        json!({
            "count": self.total,
            "next": next,
            "previous": null,
            "results": results,
        })
        .to_string()
    }
}

/// Listing item for numeric id `id`
pub fn entry_json(id: u32) -> serde_json::Value {
    json!({
        "name": format!("pokemon-{id}"),
        "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
    })
}

fn query_value(query: &[(&str, String)], key: &str) -> u32 {
    query
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl Transport for FakeListing {
    async fn get(
        &self,
        _path: &str,
        query: &[(&str, String)],
    ) -> Result<TransportResponse, FetchError> {
        let limit = query_value(query, "limit");
        let offset = query_value(query, "offset");
        self.requests.lock().unwrap().push((limit, offset));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.scripted.lock().unwrap().pop_front();
        match scripted {
            Some(response) => response,
            None => Ok(TransportResponse::new(200, self.page_body(limit, offset))),
        }
    }
}
