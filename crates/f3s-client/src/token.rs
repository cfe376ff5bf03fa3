//! Fallback bearer-token sources.

use async_trait::async_trait;

/// Supplies a federated-identity session token when no local token is valid.
#[async_trait]
pub trait FederatedTokenSource: Send + Sync {
    /// The current session token, if the identity provider has one.
    async fn session_token(&self) -> Option<String>;
}

/// A fixed token, typically from configuration.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    /// Wraps `token`. Blank tokens yield no source.
    pub fn from_config(token: Option<&str>) -> Option<Self> {
        token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| Self { token: t.to_string() })
    }
}

#[async_trait]
impl FederatedTokenSource for StaticTokenSource {
    async fn session_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}
