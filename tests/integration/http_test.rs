//! HTTP surface tests: static documents, 404s and CORS

use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::HeaderValue;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::json;

use echo_frontier::shared::DocumentName;

use crate::common::TestGateway;

#[tokio::test]
async fn test_documents_are_served_read_only() {
    let gateway = TestGateway::new();
    gateway
        .state
        .documents
        .write(DocumentName::Team, &json!([{"name": "GD_Abomination"}]))
        .await
        .unwrap();
    let server = TestServer::new(gateway.router()).unwrap();

    let response = server.get("/data/team.json").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([{"name": "GD_Abomination"}]));
}

#[tokio::test]
async fn test_missing_document_and_unknown_route() {
    let gateway = TestGateway::new();
    let server = TestServer::new(gateway.router()).unwrap();

    server.get("/data/progress.json").await.assert_status_not_found();
    server.get("/api/whatever").await.assert_status_not_found();
}

#[tokio::test]
async fn test_cors_for_allowed_origin() {
    let gateway = TestGateway::new();
    gateway
        .state
        .documents
        .write(DocumentName::Progress, &json!({"step": 1}))
        .await
        .unwrap();
    let server = TestServer::new(gateway.router()).unwrap();

    let response = server
        .get("/data/progress.json")
        .add_header(ORIGIN, HeaderValue::from_static("http://127.0.0.1:5500"))
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://127.0.0.1:5500"))
    );
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some(&HeaderValue::from_static("true"))
    );
}

#[tokio::test]
async fn test_no_cors_for_unlisted_origin() {
    let gateway = TestGateway::new();
    gateway
        .state
        .documents
        .write(DocumentName::Progress, &json!({"step": 1}))
        .await
        .unwrap();
    let server = TestServer::new(gateway.router()).unwrap();

    let response = server
        .get("/data/progress.json")
        .add_header(ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;

    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
