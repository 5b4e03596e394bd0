//! Integration tests for the feed client against a mock server.

use satchel_api::{FeedClient, FeedQuery};
use satchel_core::config::ApiConfig;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FeedClient {
    FeedClient::new(ApiConfig {
        base_url: server.uri(),
        school_id: "2".into(),
        api_version: "5".into(),
        app_version: "1.0.3".into(),
    })
}

#[tokio::test]
async fn fetch_attaches_the_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/api/fetchnotifications"))
        .and(header("authorization", "Bearer tok123"))
        .and(query_param("previous_time_stamp", "0"))
        .and(query_param("category", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {
                "notificationData": [
                    { "id": "n1", "title": "Sports day", "description": "Friday" }
                ],
                "category": [
                    { "id": "c1", "title": "Events", "sort_order": "1" }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client_for(&server)
        .fetch_notifications("tok123", &FeedQuery::default())
        .await
        .unwrap();

    assert_eq!(page.notifications.len(), 1);
    assert_eq!(page.notifications[0].title, "Sports day");
    assert_eq!(page.categories[0].title, "Events");
}

#[tokio::test]
async fn rejected_token_is_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/api/fetchnotifications"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_notifications("stale", &FeedQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_invalid_credentials());
}

#[tokio::test]
async fn envelope_failure_code_is_a_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/api/fetchnotifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 500,
            "message": "feed unavailable"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_notifications("tok123", &FeedQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_server());
    assert!(err.to_string().contains("feed unavailable"));
}

#[tokio::test]
async fn empty_feed_parses_to_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/api/fetchnotifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {}
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .fetch_notifications("tok123", &FeedQuery::default())
        .await
        .unwrap();

    assert!(page.notifications.is_empty());
    assert!(page.categories.is_empty());
}
