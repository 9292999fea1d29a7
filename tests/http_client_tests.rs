//! Integration tests for the HTTP transport.
//!
//! These tests run the client against a local mock server and verify the
//! wire format: method, path, parameter placement, authentication headers,
//! and transport error mapping.

use oneheart_api::clients::{HttpClient, HttpMethod, HttpRequest, NoopSink};
use oneheart_api::{BaseUrl, HttpError, OneheartConfig};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> OneheartConfig {
    OneheartConfig::builder()
        .client_id("my-client-id")
        .client_secret("my-client-secret")
        .base_url(BaseUrl::new(format!("{}/api/", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(&config_for(server), Arc::new(NoopSink)).unwrap()
}

// ============================================================================
// Authentication and Headers
// ============================================================================

#[tokio::test]
async fn test_requests_carry_basic_auth_and_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spots"))
        .and(header(
            "authorization",
            "Basic bXktY2xpZW50LWlkOm15LWNsaWVudC1zZWNyZXQ=",
        ))
        .and(header("accept", "application/json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "spots").build().unwrap();
    let response = client_for(&server).request(&request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, b"{}");
}

// ============================================================================
// Parameter Placement
// ============================================================================

#[tokio::test]
async fn test_get_parameters_travel_in_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spots"))
        .and(query_param("offset", "0"))
        .and(query_param("max", "10"))
        .and(query_param("fields", "id,name"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "spots")
        .param("offset", "0")
        .param("max", "10")
        .param("fields", "id,name")
        .build()
        .unwrap();

    client_for(&server).request(&request).await.unwrap();
}

#[tokio::test]
async fn test_post_parameters_travel_as_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spots"))
        .and(query_param("oauth_token", "71d3403myz"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("name=Test&theme=Action+sociale"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Post, "spots")
        .query_param("oauth_token", "71d3403myz")
        .param("name", "Test")
        .param("theme", "Action sociale")
        .build()
        .unwrap();

    client_for(&server).request(&request).await.unwrap();
}

#[tokio::test]
async fn test_put_sends_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/spots/4"))
        .and(body_string("name=Renamed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Put, "spots/4")
        .param("name", "Renamed")
        .build()
        .unwrap();

    client_for(&server).request(&request).await.unwrap();
}

#[tokio::test]
async fn test_delete_is_sent_with_delete_verb() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/spots/4"))
        .and(body_string("reason=duplicate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Delete, "spots/4")
        .param("reason", "duplicate")
        .build()
        .unwrap();

    client_for(&server).request(&request).await.unwrap();
}

// ============================================================================
// Responses and Errors
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_returned_uninterpreted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/news/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "news/9").build().unwrap();
    let response = client_for(&server).request(&request).await.unwrap();

    assert_eq!(response.code, 404);
    assert_eq!(response.body, b"not here");
}

#[tokio::test]
async fn test_timeout_maps_to_timeout_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = OneheartConfig::builder()
        .client_id("id")
        .client_secret("secret")
        .base_url(BaseUrl::new(format!("{}/api/", server.uri())).unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = HttpClient::new(&config, Arc::new(NoopSink)).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "spots").build().unwrap();
    let error = client.request(&request).await.unwrap_err();

    assert!(error.is_timeout(), "expected timeout, got {error:?}");
    assert!(matches!(error, HttpError::Timeout(_)));
}

#[tokio::test]
async fn test_refused_connection_maps_to_connect_error() {
    let config = OneheartConfig::builder()
        .client_id("id")
        .client_secret("secret")
        .base_url(BaseUrl::new("http://127.0.0.1:1/api/").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config, Arc::new(NoopSink)).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "spots").build().unwrap();
    let error = client.request(&request).await.unwrap_err();

    assert!(matches!(error, HttpError::Connect(_)));
}
