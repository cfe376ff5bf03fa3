//! The API gateway client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use f3s_auth::jwt::codec;
use f3s_auth::session::{SessionStore, SessionStoreExt};
use f3s_core::config::BackendConfig;
use f3s_core::{AppError, AppResult, ErrorKind};

use crate::error::classify;
use crate::token::FederatedTokenSource;

/// Places `endpoint` under `prefix` unless it is already an API path or an
/// absolute URL.
///
/// `posts` and `/posts` both become `/api/v1/posts` for the default prefix.
pub fn normalize_endpoint(prefix: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://")
        || endpoint.starts_with("https://")
        || endpoint.starts_with("/api/")
    {
        return endpoint.to_string();
    }

    let prefix = prefix.trim_end_matches('/');
    let path = endpoint.trim_start_matches('/');
    if path.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}/{path}")
    }
}

/// Typed JSON client for the REST backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: BackendConfig,
    store: Arc<dyn SessionStore>,
    federated: Option<Arc<dyn FederatedTokenSource>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("api_prefix", &self.config.api_prefix)
            .field("federated", &self.federated.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client reading bearer tokens from `store`.
    pub fn new(config: BackendConfig, store: Arc<dyn SessionStore>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            config,
            store,
            federated: None,
        })
    }

    /// Adds a fallback token source consulted when the stored token is unusable.
    pub fn with_federated(mut self, source: Arc<dyn FederatedTokenSource>) -> Self {
        self.federated = Some(source);
        self
    }

    /// Backend settings in use.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Resolves `endpoint` to a full URL.
    pub fn url_for(&self, endpoint: &str) -> AppResult<Url> {
        let path = normalize_endpoint(&self.config.api_prefix, endpoint);
        let full = if path.starts_with("http://") || path.starts_with("https://") {
            path
        } else {
            format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
        };

        Url::parse(&full)
            .map_err(|e| AppError::configuration(format!("Invalid request URL '{full}': {e}")))
    }

    /// GET `endpoint`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        self.send(Method::GET, self.url_for(endpoint)?, None::<&()>).await
    }

    /// GET `endpoint` with query parameters appended.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let mut url = self.url_for(endpoint)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        self.send(Method::GET, url, None::<&()>).await
    }

    /// POST a JSON body to `endpoint`.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send(Method::POST, self.url_for(endpoint)?, Some(body)).await
    }

    /// PUT a JSON body to `endpoint`.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send(Method::PUT, self.url_for(endpoint)?, Some(body)).await
    }

    /// PATCH a JSON body to `endpoint`.
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send(Method::PATCH, self.url_for(endpoint)?, Some(body)).await
    }

    /// DELETE `endpoint`.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        self.send(Method::DELETE, self.url_for(endpoint)?, None::<&()>).await
    }

    /// The token to send: a stored token that is not expired, else the
    /// federated session token, else none.
    pub async fn bearer_token(&self) -> Option<String> {
        if let Some(token) = self.store.access_token() {
            if !codec::is_expired(&token) {
                return Some(token);
            }
            debug!("Stored access token is expired");
        }

        match &self.federated {
            Some(source) => source.session_token().await,
            None => None,
        }
    }

    async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> AppResult<T> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(token) = self.bearer_token().await {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "Backend request failed");
            AppError::with_source(ErrorKind::Network, format!("Network error: {e}"), e)
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Network, format!("Failed to read response: {e}"), e)
        })?;

        debug!(%method, %url, status = status.as_u16(), bytes = bytes.len(), "Backend response");

        if !status.is_success() {
            return Err(classify(status, &bytes));
        }

        let value = if bytes.is_empty() {
            Value::Null
        } else if is_json {
            serde_json::from_slice(&bytes)?
        } else {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        };

        serde_json::from_value(value).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Unexpected response body from {url}: {e}"),
                e,
            )
            .with_status(status.as_u16())
        })
    }
}
