//! Tests for the HTTP transport module

use super::*;
use crate::error::FetchError;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(!config.log_bodies);
    assert!(config.user_agent.starts_with("pokedex-catalog/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://pokeapi.co/api/v2/")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .log_bodies(true)
        .build();

    assert_eq!(config.base_url, Some("https://pokeapi.co/api/v2/".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(config.log_bodies);
}

#[test]
fn test_transport_response_is_success() {
    assert!(TransportResponse::new(200, "{}").is_success());
    assert!(TransportResponse::new(204, "").is_success());
    assert!(!TransportResponse::new(301, "").is_success());
    assert!(!TransportResponse::new(404, "").is_success());
    assert!(!TransportResponse::new(500, "").is_success());
}

#[tokio::test]
async fn test_get_sends_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .and(header("X-Custom", "value"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"count\":0}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api/v2/", mock_server.uri()))
        .header("X-Custom", "value")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get("pokemon", &[("limit", "20".to_string()), ("offset", "40".to_string())])
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "{\"count\":0}");
}

#[tokio::test]
async fn test_get_passes_error_status_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.get("/pokemon", &[]).await.unwrap();
    assert_eq!(response.status, 503);
    assert!(!response.is_success());
    assert_eq!(response.body, "maintenance");
}

#[tokio::test]
async fn test_get_absolute_url_ignores_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("http://unused.invalid")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get(&format!("{}/elsewhere", mock_server.uri()), &[])
        .await
        .unwrap();
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_get_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("pokemon", &[]).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
    assert!(err.to_string().contains("timeout"));
}

#[tokio::test]
async fn test_get_connection_refused_is_transport_error() {
    // wiremock pools its servers, so take a port from a plain listener
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let config = HttpClientConfig::builder()
        .base_url(uri)
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("pokemon", &[]).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
