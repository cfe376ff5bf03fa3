//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use f3s_api::AppState;
use f3s_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Catalog fixture directory, removed on drop
    _data_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over the fixture catalog
    pub async fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_catalog_fixture(data_dir.path());

        let mut config = AppConfig::default();
        config.catalog.data_dir = data_dir.path().display().to_string();

        let state = AppState::from_config(config.clone())
            .await
            .expect("Failed to build app state");
        let router = f3s_api::build_app(state, &config.server.cors);

        Self {
            router,
            config,
            _data_dir: data_dir,
        }
    }

    /// Make a request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make a request with a literal body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Simplified response for test assertions
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

fn write_file(path: &Path, contents: &Value) {
    std::fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("Failed to create fixture dir");
    std::fs::write(path, contents.to_string()).expect("Failed to write fixture");
}

/// Writes one game with armor, legs, and sword items.
fn write_catalog_fixture(dir: &Path) {
    write_file(
        &dir.join("games.json"),
        &json!([
            {"id": 1, "name": "Tibia", "image": "/images/tibia.png", "slug": "tibia"},
            {"id": 2, "name": "Ragnarok Online", "image": "/images/ro.png", "slug": "ragnarok"}
        ]),
    );
    write_file(
        &dir.join("items/tibia/armors_dml_format.json"),
        &json!([
            {
                "name": "Magic Plate Armor",
                "min_level": 60,
                "item_vocations": [{"vocation": "Knight"}, {"vocation": "Paladin"}],
                "item_protections": [{"element": "physical", "value": 12}]
            },
            {
                "name": "Leather Armor",
                "item_vocations": [],
                "item_protections": []
            }
        ]),
    );
    write_file(
        &dir.join("items/tibia/legs_dml_format.json"),
        &json!([
            {
                "name": "Crown Legs",
                "min_level": 30,
                "item_vocations": [{"vocation": "Knight"}],
                "item_protections": []
            }
        ]),
    );
    write_file(
        &dir.join("items/tibia/swords_dml_format.json"),
        &json!([
            {
                "name": "Magic Sword",
                "min_level": 80,
                "item_vocations": [{"vocation": "Knight"}],
                "item_protections": [{"element": "fire", "value": 5}]
            }
        ]),
    );
}

/// Calls recorded by a stub backend, as `METHOD path`.
pub type Recorded = Arc<Mutex<Vec<String>>>;

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{addr}")
}

/// An unsigned token whose `exp` is `seconds` from now.
pub fn token_expiring_in(seconds: i64) -> String {
    let exp = chrono::Utc::now().timestamp() + seconds;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({"exp": exp, "sub": "1"}).to_string());
    format!("{header}.{payload}.signature")
}
