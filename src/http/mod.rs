//! HTTP transport module
//!
//! Provides the `Transport` seam the page fetcher talks to, and a
//! reqwest-backed `HttpClient` implementing it.
//!
//! # Features
//!
//! - **Injectable**: the fetcher only sees `Arc<dyn Transport>`
//! - **Typed failures**: connectivity and timeouts map to `FetchError::Transport`
//! - **Debug body logging**: optional, at `debug` level
//!
//! Status codes are passed through untouched; deciding what a non-2xx means
//! is the fetcher's job. No retries happen here.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, Transport, TransportResponse};

#[cfg(test)]
mod tests;
