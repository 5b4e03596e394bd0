//! Full session lifecycle over the real HTTP client and file-backed
//! secure store: login, simulated process restart, restore, logout.

use std::sync::Arc;

use satchel_api::SchoolApiClient;
use satchel_core::config::{ApiConfig, DeviceInfo};
use satchel_core::session::{SessionStatus, SessionStore};
use satchel_core::storage::{KEY_USER_DATA, KEY_USER_TOKEN, SecureStore};
use satchel_infrastructure::SecureFileStore;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_in(dir: &TempDir, server: &MockServer) -> SessionStore {
    let secure = Arc::new(SecureFileStore::with_dir(dir.path().join("secure")));
    let gateway = Arc::new(SchoolApiClient::new(
        ApiConfig {
            base_url: server.uri(),
            school_id: "2".into(),
            api_version: "5".into(),
            app_version: "1.0.3".into(),
        },
        DeviceInfo::default(),
    ));
    SessionStore::new(secure, gateway)
}

#[tokio::test]
async fn login_persists_and_survives_a_restart() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/v5/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {
                "access_token": "tok123",
                "user": { "id": "1", "first_name": "A" }
            }
        })))
        .mount(&server)
        .await;

    let store = store_in(&dir, &server);
    store.restore().await;
    let snapshot = store.login("user@example.com", "secret1").await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Authenticated);

    // The persisted keys hold the token and the serialized profile.
    let secure = SecureFileStore::with_dir(dir.path().join("secure"));
    assert_eq!(secure.get(KEY_USER_TOKEN).await.as_deref(), Some("tok123"));
    let persisted = secure.get(KEY_USER_DATA).await.unwrap();
    assert!(persisted.contains(r#""first_name":"A""#));

    // Fresh store over the same directory: a process restart.
    let restarted = store_in(&dir, &server);
    let restored = restarted.restore().await;
    assert_eq!(restored.status, SessionStatus::Authenticated);
    assert_eq!(restored.user.unwrap().first_name, "A");

    // Logout clears both keys.
    restarted.logout().await;
    assert!(secure.get(KEY_USER_TOKEN).await.is_none());
    assert!(secure.get(KEY_USER_DATA).await.is_none());
}

#[tokio::test]
async fn rejected_login_leaves_nothing_persisted() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/v5/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 401,
            "message": "bad creds"
        })))
        .mount(&server)
        .await;

    let store = store_in(&dir, &server);
    store.restore().await;
    let err = store.login("user@example.com", "wrong").await.unwrap_err();
    assert!(err.to_string().contains("bad creds"));

    assert_eq!(
        store.snapshot().await.status,
        SessionStatus::Unauthenticated
    );
    let secure = SecureFileStore::with_dir(dir.path().join("secure"));
    assert!(secure.get(KEY_USER_TOKEN).await.is_none());
    assert!(secure.get(KEY_USER_DATA).await.is_none());
}
