//! Behavioral tests for the certificate-transparency search stage.
//!
//! All tests run against a local wiremock server standing in for the index;
//! no network access is required.

use std::sync::Arc;

use domain_monitor::{Config, CtSearchClient, SearchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a search client pointed at the mock index, with no retry delay so
/// exhaustion tests stay fast.
fn search_client(server: &MockServer, attempts: usize) -> CtSearchClient {
    let mut config = Config::for_keyword("example");
    config.search_endpoint = server.uri();
    config.search_attempts = attempts;
    config.search_retry_delay_secs = 0;
    CtSearchClient::new(Arc::new(reqwest::Client::new()), &config)
}

fn index_body(names: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| serde_json::json!({ "name_value": name, "id": 1 }))
            .collect(),
    )
}

#[tokio::test]
async fn test_search_sends_wildcarded_keyword() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "%example%"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["a.example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let names = search_client(&server, 3)
        .search("example")
        .await
        .expect("search succeeds");
    assert_eq!(names, vec!["a.example.com"]);
}

#[tokio::test]
async fn test_search_deduplicates_repeated_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&[
            "a.example.com",
            "b.example.com",
            "a.example.com",
        ])))
        .mount(&server)
        .await;

    let names = search_client(&server, 3)
        .search("example")
        .await
        .expect("search succeeds");
    assert_eq!(names, vec!["a.example.com", "b.example.com"]);
}

#[tokio::test]
async fn test_search_stops_after_first_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["a.example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let names = search_client(&server, 3)
        .search("example")
        .await
        .expect("search succeeds");
    assert_eq!(names.len(), 1);
    // MockServer verifies the expect(1) bound on drop
}

#[tokio::test]
async fn test_search_retries_after_server_errors_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["late.example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let names = search_client(&server, 3)
        .search("example")
        .await
        .expect("last attempt succeeds");
    assert_eq!(names, vec!["late.example.com"]);
}

#[tokio::test]
async fn test_search_retries_unparseable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&["a.example.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let names = search_client(&server, 2)
        .search("example")
        .await
        .expect("second attempt succeeds");
    assert_eq!(names, vec!["a.example.com"]);
}

#[tokio::test]
async fn test_search_never_exceeds_max_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let result = search_client(&server, 3).search("example").await;
    match result {
        Err(SearchError::Exhausted { attempts }) => assert_eq!(attempts, 3),
        other => panic!("expected Exhausted, got {other:?}"),
    }
    // MockServer verifies on drop that exactly 3 requests were made
}

#[tokio::test]
async fn test_search_lenient_degrades_exhaustion_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let names = search_client(&server, 2).search_lenient("example").await;
    assert!(names.is_empty());
}

#[tokio::test]
async fn test_search_empty_index_response_is_success_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let names = search_client(&server, 3)
        .search("example")
        .await
        .expect("empty array is a valid result");
    assert!(names.is_empty());
}
