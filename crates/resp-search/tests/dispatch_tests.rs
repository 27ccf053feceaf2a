//! Tests for the standalone `dispatch` entry point against a mock backend.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use resp_search::client::RespClient;
use resp_search::config::Config;
use resp_search::dispatch;
use resp_search::error::ValidationError;
use resp_search::models::{OutputRecord, SearchRequest, SearchResponse, Source};
use resp_search::params::extract_search_request;

fn client(mock_server: &MockServer) -> RespClient {
    RespClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

/// Items carry their parameters as fields.
fn from_item(_index: usize, item: &Value) -> Result<SearchRequest, ValidationError> {
    extract_search_request(|name| item.get(name).cloned())
}

#[tokio::test]
async fn test_dispatch_posts_to_search_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "rust", "source": "acm", "limit": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = vec![json!({"query": "rust", "source": "acm", "limit": 2})];
    let records = dispatch(&client(&mock_server), &items, &mock_server.uri(), false, from_item)
        .await
        .unwrap();

    assert_eq!(
        records,
        vec![OutputRecord::new(json!({"id": 1}), 0), OutputRecord::new(json!({"id": 2}), 0)]
    );
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/", mock_server.uri());
    let records =
        dispatch(&client(&mock_server), &[json!({})], &base_url, false, from_item).await.unwrap();

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_custom_extractor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "item-1", "source": "arxiv", "limit": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hit": 1})))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "item-0", "source": "arxiv", "limit": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hit": 0})))
        .mount(&mock_server)
        .await;

    let extract = |index: usize, _item: &Value| -> Result<SearchRequest, ValidationError> {
        Ok(SearchRequest::new(format!("item-{index}"), Source::Arxiv, 5))
    };

    let records = dispatch(
        &client(&mock_server),
        &[json!(null), json!(null)],
        &mock_server.uri(),
        false,
        extract,
    )
    .await
    .unwrap();

    assert_eq!(records[0].payload, json!({"hit": 0}));
    assert_eq!(records[1].payload, json!({"hit": 1}));
}

#[tokio::test]
async fn test_continue_on_fail_keeps_batch_alive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let items = vec![json!({}), json!({"minYear": 2020, "maxYear": 2010}), json!({})];
    let records = dispatch(&client(&mock_server), &items, &mock_server.uri(), true, from_item)
        .await
        .unwrap();

    let indices: Vec<usize> = records.iter().map(OutputRecord::source_item_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(
        records[1].error_message(),
        Some("Min Year (2020) cannot be greater than Max Year (2010)")
    );
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_client_search_classifies_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "q", "source": "all", "limit": 5, "max_year": 2000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"a": 1}])))
        .mount(&mock_server)
        .await;

    let request = SearchRequest::new("q", Source::All, 5).with_years(None, Some(2000));
    let url = format!("{}/search", mock_server.uri());
    let response = client(&mock_server).search(&url, &request).await.unwrap();

    assert_eq!(response, SearchResponse::Many(vec![json!({"a": 1})]));
}
