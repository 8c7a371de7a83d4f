//! Login integration tests
//!
//! Activation, returning users and failures as seen by a connection.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use echo_frontier::backend::auth::sessions::TOKEN_TTL_HOURS;
use echo_frontier::shared::ServerEvent;

use crate::common::{create_active_user, invite_user, login_event, TestGateway};

#[tokio::test]
async fn test_first_login_activates_then_wrong_password_fails() {
    let gateway = TestGateway::new();
    let flame = invite_user(gateway.users(), "Flame").await;
    let mut conn = gateway.connect().await;

    conn.send(&gateway, login_event("Flame", "abc123")).await;
    let events = conn.drain();
    assert_eq!(events.len(), 1);
    let token = assert_matches!(&events[0], ServerEvent::LoginSuccess(s) => {
        assert_eq!(s.message, "Account Activated!");
        s.token.clone()
    });

    let claims = gateway.state.sessions.verify(&token).unwrap();
    assert_eq!(claims.id, flame.id);
    assert_eq!(claims.username, "Flame");
    assert_eq!(claims.role, "member");

    let stored = gateway.users().find_by_username("Flame").await.unwrap().unwrap();
    assert!(bcrypt::verify("abc123", stored.password_hash.as_deref().unwrap()).unwrap());

    conn.send(&gateway, login_event("Flame", "wrong")).await;
    assert_eq!(
        conn.drain(),
        vec![ServerEvent::LoginError("Invalid Credentials.".to_string())]
    );
}

#[tokio::test]
async fn test_returning_user_gets_fresh_token() {
    let gateway = TestGateway::new();
    let lele = create_active_user(gateway.users(), "Lele", "hunter2").await;
    let mut conn = gateway.connect().await;

    conn.send(&gateway, login_event("Lele", "hunter2")).await;
    let events = conn.drain();
    let token = assert_matches!(&events[..], [ServerEvent::LoginSuccess(s)] => {
        assert_eq!(s.message, "Welcome back.");
        s.token.clone()
    });

    let claims = gateway.state.sessions.verify(&token).unwrap();
    assert_eq!(claims.id, lele.id);
    assert_eq!(claims.username, lele.username);
    assert_eq!(claims.role, lele.role);
    assert!(claims.exp - claims.iat <= TOKEN_TTL_HOURS * 3600);
}

#[tokio::test]
async fn test_unknown_username() {
    let gateway = TestGateway::new();
    let mut conn = gateway.connect().await;

    conn.send(&gateway, login_event("ghost", "whatever")).await;
    assert_eq!(
        conn.drain(),
        vec![ServerEvent::LoginError("Username not found.".to_string())]
    );
}

#[tokio::test]
async fn test_login_reply_goes_to_sender_only() {
    let gateway = TestGateway::new();
    create_active_user(gateway.users(), "SimLeek", "pw").await;
    let mut a = gateway.connect().await;
    let mut b = gateway.connect().await;

    a.send(&gateway, login_event("SimLeek", "pw")).await;

    assert_eq!(a.drain().len(), 1);
    assert!(b.drain().is_empty());
}

#[tokio::test]
async fn test_corrupt_hash_reports_generic_server_error() {
    let gateway = TestGateway::new();
    gateway
        .users()
        .create_or_activate("Broken", Some("$2b$not-a-real-hash".to_string()))
        .await
        .unwrap();
    let mut conn = gateway.connect().await;

    conn.send(&gateway, login_event("Broken", "pw")).await;
    assert_eq!(
        conn.drain(),
        vec![ServerEvent::LoginError("Server authentication error.".to_string())]
    );
}

#[tokio::test]
async fn test_malformed_login_leaves_invite_pending() {
    let gateway = TestGateway::new();
    invite_user(gateway.users(), "Flame").await;
    let mut conn = gateway.connect().await;

    conn.send_text(&gateway, r#"{"event":"attempt-login","data":{"username":"Flame"}}"#)
        .await;
    conn.send_text(
        &gateway,
        r#"{"event":"attempt-login","data":{"username":"Flame","password":123}}"#,
    )
    .await;

    assert_eq!(
        conn.drain(),
        vec![ServerEvent::LoginError("Server authentication error.".to_string()); 2]
    );
    assert!(conn.ctx.session.is_none());

    let stored = gateway.users().find_by_username("Flame").await.unwrap().unwrap();
    assert!(stored.password_hash.is_none());
}
