//! Save fan-out integration tests

use pretty_assertions::assert_eq;
use serde_json::json;

use echo_frontier::backend::middleware::AuthorizationPolicy;
use echo_frontier::shared::{ClientEvent, DocumentName, ServerEvent};

use crate::common::{create_active_user, login_event, TestGateway};

#[tokio::test]
async fn test_progress_refreshes_everyone() {
    let gateway = TestGateway::new();
    let mut a = gateway.connect().await;
    let mut b = gateway.connect().await;
    let mut c = gateway.connect().await;

    a.send(&gateway, ClientEvent::UpdateProgressFile(json!({"step": 2}))).await;

    assert_eq!(a.drain(), vec![ServerEvent::SaveSuccess]);
    assert_eq!(b.drain(), vec![ServerEvent::SaveSuccess]);
    assert_eq!(c.drain(), vec![ServerEvent::SaveSuccess]);
    assert_eq!(
        gateway.state.documents.read(DocumentName::Progress).await.unwrap(),
        Some(json!({"step": 2}))
    );
}

#[tokio::test]
async fn test_team_and_projects_reach_sender_only() {
    let gateway = TestGateway::new();
    let mut a = gateway.connect().await;
    let mut b = gateway.connect().await;

    a.send(&gateway, ClientEvent::UpdateTeamFile(json!([{"name": "Flame"}]))).await;
    a.send(&gateway, ClientEvent::UpdateProjectsFile(json!({"frontier": "active"}))).await;

    assert_eq!(a.drain(), vec![ServerEvent::SaveSuccess, ServerEvent::SaveSuccess]);
    assert!(b.drain().is_empty());
}

#[tokio::test]
async fn test_availability_pushes_value_to_others() {
    let gateway = TestGateway::new();
    let mut a = gateway.connect().await;
    let mut b = gateway.connect().await;
    let mut c = gateway.connect().await;
    let availability = json!({"Lele": {"mon": true, "tue": false}});

    a.send(&gateway, ClientEvent::SaveAvailability(availability.clone())).await;

    assert_eq!(a.drain(), vec![ServerEvent::SaveSuccess]);
    assert_eq!(b.drain(), vec![ServerEvent::LoadAvailability(availability.clone())]);
    assert_eq!(c.drain(), vec![ServerEvent::LoadAvailability(availability)]);
}

#[tokio::test]
async fn test_write_failure_reaches_sender_only() {
    let gateway = TestGateway::new();
    // A directory in place of the progress file makes the write fail.
    std::fs::create_dir(gateway.data_dir().join("progress.json")).unwrap();
    let mut a = gateway.connect().await;
    let mut b = gateway.connect().await;

    a.send(&gateway, ClientEvent::UpdateProgressFile(json!({"step": 3}))).await;

    let events = a.drain();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ServerEvent::SaveError(message) => {
            assert!(message.starts_with("FileSystem write failed: "), "{}", message)
        }
        other => panic!("unexpected event: {:?}", other),
    }
    assert!(b.drain().is_empty());
}

#[tokio::test]
async fn test_disconnected_clients_are_skipped() {
    let gateway = TestGateway::new();
    let mut a = gateway.connect().await;
    let b = gateway.connect().await;
    gateway.state.registry.unregister(b.ctx.id).await;

    a.send(&gateway, ClientEvent::UpdateProgressFile(json!({"step": 1}))).await;

    assert_eq!(a.drain(), vec![ServerEvent::SaveSuccess]);
    assert_eq!(gateway.state.registry.len().await, 1);
}

#[tokio::test]
async fn test_require_login_policy() {
    let gateway = TestGateway::with_policy(AuthorizationPolicy::RequireLogin);
    create_active_user(gateway.users(), "Speedix08", "pw").await;
    let mut a = gateway.connect().await;
    let mut b = gateway.connect().await;

    a.send(&gateway, ClientEvent::UpdateProgressFile(json!({"step": 9}))).await;
    assert_eq!(a.drain(), vec![ServerEvent::SaveError("Not authorized.".to_string())]);
    assert!(b.drain().is_empty());

    a.send(&gateway, login_event("Speedix08", "pw")).await;
    a.drain();
    a.send(&gateway, ClientEvent::UpdateProgressFile(json!({"step": 9}))).await;

    assert_eq!(a.drain(), vec![ServerEvent::SaveSuccess]);
    assert_eq!(b.drain(), vec![ServerEvent::SaveSuccess]);
}
