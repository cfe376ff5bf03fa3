//! Fixtures shared by the unit tests in this crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use f3s_core::{AppError, AppResult};

use crate::backend::AuthBackend;
use crate::session::model::{LoginCredentials, LoginResponse, TokenPair, UserProfile};

/// An unsigned token whose `exp` is `seconds` from now.
pub fn token_expiring_in(seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::json!({
        "exp": Utc::now().timestamp() + seconds,
        "iat": Utc::now().timestamp(),
        "sub": "1",
    });
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

/// Scriptable [`AuthBackend`] that counts calls.
pub struct StubBackend {
    pub login_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    login_error: Option<String>,
    refresh_fails: bool,
    refresh_delay: Duration,
    refresh_lifetime: i64,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            login_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            login_error: None,
            refresh_fails: false,
            refresh_delay: Duration::ZERO,
            refresh_lifetime: 3600,
        }
    }

    pub fn failing_login(mut self, message: &str) -> Self {
        self.login_error = Some(message.to_string());
        self
    }

    pub fn failing_refresh(mut self) -> Self {
        self.refresh_fails = true;
        self
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Seconds until expiry of the access token handed out on refresh.
    pub fn with_refresh_lifetime(mut self, seconds: i64) -> Self {
        self.refresh_lifetime = seconds;
        self
    }

    pub fn profile() -> UserProfile {
        UserProfile {
            id: "1".into(),
            username: "admin".into(),
            email: "admin@f3ssoftware.com".into(),
            first_name: "Site".into(),
            last_name: "Admin".into(),
            roles: vec!["admin".into()],
            is_active: None,
        }
    }
}

#[async_trait]
impl AuthBackend for StubBackend {
    async fn login(&self, _credentials: &LoginCredentials) -> AppResult<LoginResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.login_error {
            return Err(AppError::unauthorized(message.clone()).with_status(401));
        }
        Ok(LoginResponse {
            access_token: token_expiring_in(3600),
            refresh_token: "refresh-1".into(),
            expires_in: 3600,
            token_type: "Bearer".into(),
            user: Self::profile(),
        })
    }

    async fn refresh(&self, _refresh_token: &str) -> AppResult<TokenPair> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if !self.refresh_delay.is_zero() {
            tokio::time::sleep(self.refresh_delay).await;
        }
        if self.refresh_fails {
            return Err(AppError::unauthorized("Refresh token expired").with_status(401));
        }
        Ok(TokenPair {
            access_token: token_expiring_in(self.refresh_lifetime),
            refresh_token: "refresh-2".into(),
        })
    }
}
