// bizhub-app/tests/session_flow.rs
// End-to-end session scenarios against a stub API

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};
use tempfile::TempDir;

use bizhub_app::{FileSessionStore, Navigator, Route};
use bizhub_client::{
    ClientConfig, ClientError, HttpClient, LoginRequest, Session, SessionStore,
};
use shared::models::Business;

async fn login(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "token": "issued-token",
            "business": {
                "_id": "b1",
                "name": "Acme Retail",
                "email": "owner@acme.test",
                "createdAt": "2024-05-01T00:00:00Z",
                "updatedAt": "2024-05-01T00:00:00Z",
            }
        }
    }))
}

async fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Token expired" })),
    )
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/orders", get(unauthorized));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn sample_session() -> Session {
    Session {
        token: "tok-1".to_string(),
        business: Business {
            id: "b1".to_string(),
            name: "Acme Retail".to_string(),
            email: "owner@acme.test".to_string(),
            phone: None,
            address: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
    }
}

#[tokio::test]
async fn login_persists_session_and_expiry_forces_login_route() {
    let base_url = spawn_stub().await;
    let temp = TempDir::new().unwrap();
    let store = Arc::new(FileSessionStore::new(temp.path().join("session.json")));
    let client = HttpClient::new(&ClientConfig::new(&base_url), store.clone());

    let navigator = Arc::new(Navigator::new());
    let watcher = Arc::clone(&navigator).watch_session(client.subscribe());

    // Login: both session halves land in the file and the host moves on.
    navigator.navigate(Route::Login);
    client
        .auth()
        .login(&LoginRequest {
            email: "owner@acme.test".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert!(store.exists());
    assert_eq!(store.load().unwrap().token, "issued-token");
    navigator.navigate(Route::Dashboard);

    // Any later unauthorized response clears storage and forces the
    // login route, independent of the page that triggered it.
    navigator.navigate(Route::Orders);
    let err = client.orders().list().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(!store.exists(), "session file must be removed");

    let mut forced = false;
    for _ in 0..100 {
        if navigator.current() == Route::Login {
            forced = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(forced, "watcher should have forced the login route");
    watcher.abort();
}

#[tokio::test]
async fn file_store_survives_process_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    let store = FileSessionStore::new(&path);
    store.save(&sample_session()).unwrap();

    // A fresh instance at the same path sees the session.
    let reopened = FileSessionStore::new(&path);
    let loaded = reopened.load().unwrap();
    assert_eq!(loaded.token, "tok-1");
    assert_eq!(loaded.business.name, "Acme Retail");

    reopened.clear().unwrap();
    assert!(!path.exists());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn corrupt_session_file_reads_as_logged_out() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileSessionStore::new(&path);
    assert!(store.load().is_none());

    // Clearing twice stays a no-op.
    store.clear().unwrap();
    store.clear().unwrap();
}
