//! Tests for the store API source

use super::*;
use crate::config::{ApiKey, ContentFilter, Settings};
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::PageSource;
use crate::types::{Cursor, Item};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> StoreApiSource {
    let settings = Settings {
        base_url: server.uri(),
        ..Settings::default()
    };
    StoreApiSource::from_settings(&settings, ApiKey::new("test-key")).unwrap()
}

// ============================================================================
// Schema Tests
// ============================================================================

#[test]
fn test_decode_full_page() {
    let body = json!({
        "response": {
            "apps": [
                {"appid": 10, "name": "Counter-Strike", "last_modified": 1_745_368_572, "price_change_number": 1},
                {"appid": 20, "name": "Team Fortress Classic"}
            ],
            "have_more_results": true,
            "last_appid": 20
        }
    })
    .to_string();

    let page = decode_page(&body, Cursor::START).unwrap();
    assert_eq!(
        page.items,
        vec![
            Item::new(10, "Counter-Strike"),
            Item::new(20, "Team Fortress Classic")
        ]
    );
    assert_eq!(page.next_cursor, Cursor::new(20));
    assert!(page.has_more);
}

#[test]
fn test_decode_final_page_without_continuation_fields() {
    let body = json!({
        "response": {
            "apps": [{"appid": 3_000_000, "name": "Last One"}]
        }
    })
    .to_string();

    let page = decode_page(&body, Cursor::new(2_999_000)).unwrap();
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, Cursor::new(3_000_000));
}

#[test]
fn test_decode_empty_final_page_keeps_cursor() {
    let body = json!({"response": {"apps": []}}).to_string();

    let page = decode_page(&body, Cursor::new(77)).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, Cursor::new(77));
}

#[test]
fn test_decode_missing_name_is_empty() {
    let body = json!({"response": {"apps": [{"appid": 5}], "have_more_results": false}}).to_string();

    let page = decode_page(&body, Cursor::START).unwrap();
    assert_eq!(page.items, vec![Item::new(5, "")]);
}

#[test]
fn test_decode_null_name_is_empty() {
    let body = r#"{"response":{"apps":[{"appid":1,"name":null}],"have_more_results":false}}"#;

    let page = decode_page(body, Cursor::START).unwrap();
    assert_eq!(page.items, vec![Item::new(1, "")]);
    assert!(!page.has_more);
}

#[test]
fn test_decode_null_continuation_fields() {
    let body = r#"{"response":{"apps":[{"appid":9,"name":"Nine"}],"have_more_results":null,"last_appid":null}}"#;

    let page = decode_page(body, Cursor::new(3)).unwrap();
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, Cursor::new(9));
    assert_eq!(page.items, vec![Item::new(9, "Nine")]);
}

#[test]
fn test_decode_malformed_bodies() {
    let cases = [
        "not json",
        "{}",
        r#"{"response": null}"#,
        r#"{"response": {}}"#,
        r#"{"response": {"have_more_results": true, "last_appid": 4}}"#,
        r#"{"response": {"apps": [{"name": "no id"}]}}"#,
        r#"{"response": {"apps": "nope"}}"#,
    ];

    for body in cases {
        let err = decode_page(body, Cursor::START).unwrap_err();
        assert!(
            matches!(err, Error::MalformedPage { .. }),
            "body {body} gave {err:?}"
        );
    }
}

// ============================================================================
// StoreApiSource Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_sends_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .and(query_param("key", "test-key"))
        .and(query_param("include_games", "true"))
        .and(query_param("max_results", "50000"))
        .and(query_param("last_appid", "440"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "apps": [{"appid": 500, "name": "Left 4 Dead"}],
                "have_more_results": true,
                "last_appid": 500
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = source_for(&mock_server);
    let page = source.fetch_page(Cursor::new(440)).await.unwrap();

    assert_eq!(page.items, vec![Item::new(500, "Left 4 Dead")]);
    assert_eq!(page.next_cursor, Cursor::new(500));
    assert!(page.has_more);
}

#[tokio::test]
async fn test_fetch_page_content_filter_and_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .and(query_param("include_dlc", "true"))
        .and(query_param("include_software", "true"))
        .and(query_param("max_results", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": {"apps": []}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let include = ContentFilter {
        dlc: true,
        software: true,
        ..ContentFilter::default()
    };
    let source = source_for(&mock_server)
        .with_page_size(100)
        .with_include(include);

    let page = source.fetch_page(Cursor::START).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_fetch_page_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let err = source_for(&mock_server)
        .fetch_page(Cursor::START)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 403, .. }));
}

#[tokio::test]
async fn test_fetch_page_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APP_LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
        .mount(&mock_server)
        .await;

    let err = source_for(&mock_server)
        .fetch_page(Cursor::START)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedPage { .. }));
}

#[test]
fn test_source_debug_hides_key() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let source = StoreApiSource::new(client, ApiKey::new("super-secret"));
    let debug = format!("{source:?}");
    assert!(!debug.contains("super-secret"));
}
