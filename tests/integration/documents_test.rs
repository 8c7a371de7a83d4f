//! Document persistence integration tests

use pretty_assertions::assert_eq;
use serde_json::json;

use echo_frontier::backend::documents::DocumentStore;
use echo_frontier::shared::{ClientEvent, DocumentName, ServerEvent};

use crate::common::TestGateway;

#[tokio::test]
async fn test_each_event_writes_its_file() {
    let gateway = TestGateway::new();
    let mut conn = gateway.connect().await;

    conn.send(&gateway, ClientEvent::UpdateProgressFile(json!({"step": 1}))).await;
    conn.send(&gateway, ClientEvent::UpdateTeamFile(json!(["Flame"]))).await;
    conn.send(&gateway, ClientEvent::UpdateProjectsFile(json!([]))).await;
    conn.send(&gateway, ClientEvent::SaveAvailability(json!({}))).await;

    for (file, expected) in [
        ("progress.json", json!({"step": 1})),
        ("team.json", json!(["Flame"])),
        ("projects.json", json!([])),
        ("availability.json", json!({})),
    ] {
        let raw = std::fs::read_to_string(gateway.data_dir().join(file)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, expected, "{}", file);
    }
}

#[tokio::test]
async fn test_data_dir_created_on_first_write() {
    let root = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(root.path().join("public").join("data"));
    assert!(!store.data_dir().exists());

    store.write(DocumentName::Availability, &json!({"x": 1})).await.unwrap();
    store.write(DocumentName::Availability, &json!({"x": 2})).await.unwrap();

    assert_eq!(
        store.read(DocumentName::Availability).await.unwrap(),
        Some(json!({"x": 2}))
    );
}

#[tokio::test]
async fn test_files_use_two_space_indentation() {
    let gateway = TestGateway::new();
    let mut conn = gateway.connect().await;

    conn.send(&gateway, ClientEvent::UpdateTeamFile(json!({"members": ["Flame", "Lele"]}))).await;

    let raw = std::fs::read_to_string(gateway.data_dir().join("team.json")).unwrap();
    assert_eq!(
        raw,
        "{\n  \"members\": [\n    \"Flame\",\n    \"Lele\"\n  ]\n}"
    );
}

#[tokio::test]
async fn test_raw_frame_writes_document() {
    let gateway = TestGateway::new();
    let mut conn = gateway.connect().await;

    conn.send_text(
        &gateway,
        r#"{"event":"update-projects-file","data":[{"name":"Echo","status":"active"}]}"#,
    )
    .await;

    assert_eq!(
        gateway.state.documents.read(DocumentName::Projects).await.unwrap(),
        Some(json!([{"name": "Echo", "status": "active"}]))
    );
}

#[tokio::test]
async fn test_document_event_without_data_is_refused() {
    let gateway = TestGateway::new();
    let mut conn = gateway.connect().await;
    let mut other = gateway.connect().await;

    conn.send_text(&gateway, r#"{"event":"update-progress-file"}"#).await;

    let events = conn.drain();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ServerEvent::SaveError(message) => assert!(message.starts_with("Invalid progress data")),
        other => panic!("unexpected reply: {:?}", other),
    }
    assert!(other.drain().is_empty());
    assert!(!gateway.data_dir().join("progress.json").exists());
}
