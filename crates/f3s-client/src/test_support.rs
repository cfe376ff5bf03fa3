//! In-process stub backend for client tests.

use std::sync::{Arc, Mutex};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

/// Values captured by stub handlers.
pub type Recorded = Arc<Mutex<Vec<String>>>;

/// Serves the router built by `build` on an ephemeral port and returns its base URL.
pub async fn spawn_stub(build: impl FnOnce(Recorded) -> axum::Router) -> (String, Recorded) {
    let recorded = Recorded::default();
    let router = build(recorded.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}"), recorded)
}

/// An unsigned token whose `exp` is `seconds` from now.
pub fn token_expiring_in(seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD
        .encode(serde_json::json!({ "exp": Utc::now().timestamp() + seconds, "sub": "1" }).to_string());
    format!("{header}.{body}.sig")
}
