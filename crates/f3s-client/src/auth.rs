//! [`AuthBackend`] over the REST backend's `auth/*` endpoints.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use f3s_auth::AuthBackend;
use f3s_auth::session::{LoginCredentials, LoginResponse, TokenPair};
use f3s_core::AppResult;

use crate::client::ApiClient;

/// Login and refresh over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    client: ApiClient,
}

impl HttpAuthBackend {
    /// Wraps an API client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<LoginResponse> {
        debug!(username = %credentials.username, "POST auth/login");
        self.client.post("auth/login", credentials).await
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        debug!("POST auth/refresh");
        self.client
            .post("auth/refresh", &json!({ "refresh_token": refresh_token }))
            .await
    }
}
