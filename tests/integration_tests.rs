//! Integration tests using mock HTTP server
//!
//! Tests the full flow: store API pages → collector → JSON file

use serde_json::json;
use steam_applist::config::{ApiKey, Settings};
use steam_applist::engine::Collector;
use steam_applist::output::{JsonFileSink, MemorySink};
use steam_applist::pagination::RetryPolicy;
use steam_applist::source::{StoreApiSource, APP_LIST_PATH};
use steam_applist::{Error, Item};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> StoreApiSource {
    let settings = Settings {
        base_url: server.uri(),
        page_size: 2,
        ..Settings::default()
    };
    StoreApiSource::from_settings(&settings, ApiKey::new("integration-key")).unwrap()
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(5, Duration::from_millis(10))
}

async fn mount_page(server: &MockServer, last_appid: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .and(query_param("last_appid", last_appid.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Pagination Flow
// ============================================================================

#[tokio::test]
async fn test_three_page_catalog_to_file() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        0,
        json!({"response": {
            "apps": [{"appid": 10, "name": "Counter-Strike"}, {"appid": 20, "name": "Team Fortress Classic"}],
            "have_more_results": true,
            "last_appid": 20
        }}),
    )
    .await;
    mount_page(
        &mock_server,
        20,
        json!({"response": {
            "apps": [{"appid": 30, "name": "Day of Defeat"}, {"appid": 40, "name": "Deathmatch Classic"}],
            "have_more_results": true,
            "last_appid": 40
        }}),
    )
    .await;
    mount_page(
        &mock_server,
        40,
        json!({"response": {"apps": [{"appid": 50, "name": "Half-Life: Opposing Force"}]}}),
    )
    .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("data").join("apps.json");
    let sink = JsonFileSink::new(&output);

    let summary = Collector::new(source_for(&mock_server))
        .with_retry_policy(fast_retry())
        .run(&sink)
        .await
        .unwrap();

    assert_eq!(summary.stats.pages_fetched, 3);
    assert_eq!(summary.stats.items_collected, 5);

    let items: Vec<Item> = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let ids: Vec<u64> = items.iter().map(|item| item.appid).collect();
    assert_eq!(ids, vec![10, 20, 30, 40, 50]);
    assert_eq!(items[4].name, "Half-Life: Opposing Force");
}

#[tokio::test]
async fn test_empty_final_page_ends_run() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        0,
        json!({"response": {
            "apps": [{"appid": 1, "name": "A"}, {"appid": 2, "name": "B"}],
            "have_more_results": true,
            "last_appid": 2
        }}),
    )
    .await;
    mount_page(&mock_server, 2, json!({"response": {"apps": []}})).await;

    let sink = MemorySink::new();
    Collector::new(source_for(&mock_server))
        .run(&sink)
        .await
        .unwrap();

    assert_eq!(sink.saved(), vec![vec![Item::new(1, "A"), Item::new(2, "B")]]);
}

// ============================================================================
// Retry Flow
// ============================================================================

#[tokio::test]
async fn test_server_errors_are_retried_on_same_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .and(query_param("last_appid", "0"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        0,
        json!({"response": {"apps": [{"appid": 7, "name": "Seven"}]}}),
    )
    .await;

    let sink = MemorySink::new();
    let summary = Collector::new(source_for(&mock_server))
        .with_retry_policy(fast_retry())
        .run(&sink)
        .await
        .unwrap();

    assert_eq!(summary.stats.retries, 2);
    assert_eq!(sink.saved(), vec![vec![Item::new(7, "Seven")]]);
}

#[tokio::test]
async fn test_malformed_body_is_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        0,
        json!({"response": {"apps": [{"appid": 8, "name": "Eight"}]}}),
    )
    .await;

    let sink = MemorySink::new();
    Collector::new(source_for(&mock_server))
        .with_retry_policy(fast_retry())
        .run(&sink)
        .await
        .unwrap();

    assert_eq!(sink.saved(), vec![vec![Item::new(8, "Eight")]]);
}

#[tokio::test]
async fn test_exhausted_retries_write_nothing() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        0,
        json!({"response": {
            "apps": [{"appid": 1, "name": "A"}],
            "have_more_results": true,
            "last_appid": 1
        }}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .and(query_param("last_appid", "1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(5)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("apps.json");
    let sink = JsonFileSink::new(&output);

    let err = Collector::new(source_for(&mock_server))
        .with_retry_policy(fast_retry())
        .run(&sink)
        .await
        .unwrap_err();

    match err {
        Error::PageFetchFailed {
            cursor,
            attempts,
            source,
        } => {
            assert_eq!(cursor.value(), 1);
            assert_eq!(attempts, 5);
            assert!(matches!(*source, Error::HttpStatus { status: 503, .. }));
        }
        other => panic!("Expected PageFetchFailed, got {other:?}"),
    }
    assert!(!output.exists());
}
