//! Integration tests for the API client against a mock HTTP server.

use questline::api::{ApiClient, ApiError, Direction, RequestSpec};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), "user-id", "api-key")
}

#[tokio::test]
async fn get_unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/user"))
        .and(header("x-api-user", "user-id"))
        .and(header("x-api-key", "api-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"stats": {"lvl": 12}}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let data = client.send(RequestSpec::new("user")).await.unwrap();
    assert_eq!(data["stats"]["lvl"], 12);
}

#[tokio::test]
async fn get_sends_fields_as_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/tasks/user"))
        .and(query_param("type", "todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .send(
            RequestSpec::new("user")
                .aspect("tasks")
                .field("type", "todos"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn post_sends_fields_as_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/tasks/user"))
        .and(body_json(json!({"text": "Do the dishes", "type": "todo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .send(
            RequestSpec::new("user")
                .aspect("tasks")
                .method(Method::POST)
                .field("text", "Do the dishes")
                .field("type", "todo"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn score_request_hits_the_score_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/tasks/abc/score/up"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"delta": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .send(
            RequestSpec::new("user")
                .aspect("tasks")
                .id("abc")
                .method(Method::POST)
                .direction(Direction::Up),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn non_success_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/user"))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(json!({"message": "bad gateway"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.send(RequestSpec::new("user")).await.unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.send(RequestSpec::new("user")).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthFailed(_)));
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/tags/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "no such tag"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .send(
            RequestSpec::new("user")
                .aspect("tags")
                .id("nope")
                .method(Method::DELETE),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn error_without_json_body_still_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/user"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.send(RequestSpec::new("user")).await.unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "unknown error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn missing_data_member_yields_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let data = client.send(RequestSpec::new("status")).await.unwrap();
    assert!(data.is_null());
}
