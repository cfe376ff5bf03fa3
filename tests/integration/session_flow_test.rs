//! End-to-end session lifecycle against an in-process backend: login,
//! persisted session, authenticated calls, guard-driven refresh, and logout
//! on a rejected refresh.

mod helpers;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};

use f3s_auth::{
    FileSessionStore, GuardState, LoginCredentials, RouteGuard, SessionManager, SessionSlot,
    SessionState, SessionStore,
};
use f3s_client::resources::{PostQuery, PostsApi};
use f3s_client::{ApiClient, HttpAuthBackend};
use f3s_core::ErrorKind;
use f3s_core::config::{BackendConfig, SessionConfig};
use f3s_core::events::{LogoutReason, SessionEvent};

use helpers::{Recorded, spawn_backend, token_expiring_in};

fn user() -> Value {
    json!({
        "id": "42",
        "username": "admin",
        "email": "admin@f3ssoftware.com",
        "first_name": "Ada",
        "last_name": "Admin",
        "roles": ["admin"]
    })
}

fn backend(recorded: Recorded) -> Router {
    let on_login = recorded.clone();
    let on_refresh = recorded.clone();
    let on_posts = recorded;

    Router::new()
        .route(
            "/api/v1/auth/login",
            post(move |Json(body): Json<Value>| {
                let recorded = on_login.clone();
                async move {
                    recorded.lock().unwrap().push("POST auth/login".to_string());
                    if body["password"] != "s3cret" {
                        return (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"error": "Invalid credentials"})),
                        );
                    }
                    (
                        StatusCode::OK,
                        Json(json!({
                            "access_token": token_expiring_in(3600),
                            "refresh_token": "refresh-1",
                            "expires_in": 3600,
                            "token_type": "Bearer",
                            "user": user()
                        })),
                    )
                }
            }),
        )
        .route(
            "/api/v1/auth/refresh",
            post(move |Json(body): Json<Value>| {
                let recorded = on_refresh.clone();
                async move {
                    recorded.lock().unwrap().push("POST auth/refresh".to_string());
                    if body["refresh_token"] != "refresh-1" {
                        return (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"error": "Refresh token revoked"})),
                        );
                    }
                    (
                        StatusCode::OK,
                        Json(json!({
                            "access_token": token_expiring_in(3600),
                            "refresh_token": "refresh-2"
                        })),
                    )
                }
            }),
        )
        .route(
            "/api/v1/posts",
            get(move |headers: HeaderMap| {
                let recorded = on_posts.clone();
                async move {
                    recorded.lock().unwrap().push("GET posts".to_string());
                    let authorized = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|v| v.starts_with("Bearer "));
                    if !authorized {
                        return (StatusCode::UNAUTHORIZED, Json(json!({})));
                    }
                    (
                        StatusCode::OK,
                        Json(json!({
                            "data": {
                                "posts": [{
                                    "id": "p1",
                                    "title": "Hello",
                                    "slug": "hello",
                                    "status": "published",
                                    "is_published": true
                                }],
                                "pagination": {"page": 1, "limit": 10, "total": 1, "pages": 1}
                            }
                        })),
                    )
                }
            }),
        )
}

struct Harness {
    manager: Arc<SessionManager>,
    store: Arc<dyn SessionStore>,
    client: ApiClient,
    recorded: Recorded,
    base_url: String,
    dir: tempfile::TempDir,
}

impl Harness {
    async fn start() -> Self {
        let recorded = Recorded::default();
        let base_url = spawn_backend(backend(recorded.clone())).await;
        let dir = tempfile::tempdir().unwrap();
        let (manager, store, client) = open(&base_url, &dir);
        Self {
            manager,
            store,
            client,
            recorded,
            base_url,
            dir,
        }
    }

    fn calls(&self, call: &str) -> usize {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .filter(|c| *c == call)
            .count()
    }
}

fn open(
    base_url: &str,
    dir: &tempfile::TempDir,
) -> (Arc<SessionManager>, Arc<dyn SessionStore>, ApiClient) {
    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(dir.path().join("session.json")));
    let config = BackendConfig {
        base_url: base_url.to_string(),
        ..BackendConfig::default()
    };
    let client = ApiClient::new(config, Arc::clone(&store)).unwrap();
    let backend = Arc::new(HttpAuthBackend::new(client.clone()));
    let manager = Arc::new(SessionManager::new(
        Arc::clone(&store),
        backend,
        SessionConfig::default(),
    ));
    (manager, store, client)
}

#[tokio::test]
async fn test_login_persists_session() {
    let h = Harness::start().await;

    let user = h
        .manager
        .login(&LoginCredentials::new("admin", "s3cret"))
        .await
        .unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(h.manager.state(), SessionState::Valid);
    assert!(h.manager.is_authenticated());

    // A second manager over the same file sees the session.
    let (reopened, _, _) = open(&h.base_url, &h.dir);
    assert!(reopened.has_session());
    assert_eq!(reopened.stored_user().unwrap().display_name(), "Ada Admin");
    assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_rejected_login_keeps_store_empty() {
    let h = Harness::start().await;

    let err = h
        .manager
        .login(&LoginCredentials::new("admin", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
    assert!(!h.manager.has_session());
    assert!(!h.dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_authenticated_resource_call() {
    let h = Harness::start().await;
    h.manager
        .login(&LoginCredentials::new("admin", "s3cret"))
        .await
        .unwrap();

    let page = PostsApi::new(h.client.clone())
        .list(&PostQuery::default())
        .await
        .unwrap();
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.total(), 1);
    assert_eq!(h.calls("GET posts"), 1);
}

#[tokio::test]
async fn test_guard_refreshes_expired_token() {
    let h = Harness::start().await;
    h.manager
        .login(&LoginCredentials::new("admin", "s3cret"))
        .await
        .unwrap();
    h.store
        .set(SessionSlot::AccessToken, &token_expiring_in(-60))
        .unwrap();
    assert_eq!(h.manager.state(), SessionState::Expired);

    let guard = RouteGuard::new(Arc::clone(&h.manager), "/en/admin");
    assert_eq!(guard.check().await, GuardState::Authenticated);

    assert_eq!(h.calls("POST auth/refresh"), 1);
    assert_eq!(h.manager.refresh_token().as_deref(), Some("refresh-2"));
    assert_eq!(h.manager.state(), SessionState::Valid);
}

#[tokio::test]
async fn test_rejected_refresh_logs_out() {
    let h = Harness::start().await;
    h.manager
        .login(&LoginCredentials::new("admin", "s3cret"))
        .await
        .unwrap();
    h.store.set(SessionSlot::RefreshToken, "revoked").unwrap();
    h.store
        .set(SessionSlot::AccessToken, &token_expiring_in(-60))
        .unwrap();

    let mut events = h.manager.subscribe();
    let guard = RouteGuard::new(Arc::clone(&h.manager), "/en/admin");

    assert_eq!(
        guard.check().await,
        GuardState::Redirect("/en/admin".to_string())
    );
    assert_eq!(
        events.recv().await.unwrap(),
        SessionEvent::LoggedOut {
            reason: LogoutReason::RefreshFailed
        }
    );
    assert!(!h.manager.has_session());
    assert!(h.manager.stored_user().is_none());
}

#[tokio::test]
async fn test_guard_without_session_makes_no_calls() {
    let h = Harness::start().await;
    let guard = RouteGuard::new(Arc::clone(&h.manager), "/pt/admin");

    assert_eq!(
        guard.check().await,
        GuardState::Redirect("/pt/admin".to_string())
    );
    assert!(h.recorded.lock().unwrap().is_empty());
}
