//! Tests for the HTTP client module

use super::*;
use crate::auth::{AuthConfig, Credentials};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("netsuite-rest/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://123.suitetalk.api.netsuite.com")
        .timeout(Duration::from_secs(60))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://123.suitetalk.api.netsuite.com".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .queries(params(&[("offset", "0"), ("limit", "10")]))
        .header("Prefer", "transient")
        .json(json!({"q": "SELECT 1"}));

    assert_eq!(config.query.get("offset"), Some(&"0".to_string()));
    assert_eq!(config.query.get("limit"), Some(&"10".to_string()));
    assert_eq!(config.headers.get("Prefer"), Some(&"transient".to_string()));
    assert!(config.body.is_some());
}

#[tokio::test]
async fn test_send_query_headers_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/rest/query/v1/suiteql"))
        .and(query_param("limit", "1000"))
        .and(query_param("offset", "2000"))
        .and(header("Prefer", "transient"))
        .and(body_json(json!({"q": "SELECT id FROM customer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .send(
            Method::POST,
            "/services/rest/query/v1/suiteql",
            RequestConfig::new()
                .queries(params(&[("limit", "1000"), ("offset", "2000")]))
                .header("Prefer", "transient")
                .json(json!({"q": "SELECT id FROM customer"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_send_returns_non_success_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/rest/record/v1/customer/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .send(
            Method::DELETE,
            "/services/rest/record/v1/customer/1",
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "missing");
}

#[tokio::test]
async fn test_send_signs_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signed"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_auth(
        config,
        AuthConfig::TokenBased(Credentials::new("ck", "cs", "tk", "ts", "123")),
    )
    .unwrap();

    let response = client
        .send(Method::GET, "/signed", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_unsigned_client_sends_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/open"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .send(Method::GET, "/open", RequestConfig::new())
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert!(received[0].headers.get("Authorization").is_none());
}

#[tokio::test]
async fn test_absolute_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/absolute"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .send(
            Method::GET,
            &format!("{}/absolute", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .send(Method::GET, "/nothing-here", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
