//! The login/refresh seam between the session manager and the network.

use async_trait::async_trait;

use f3s_core::AppResult;

use crate::session::model::{LoginCredentials, LoginResponse, TokenPair};

/// Issues and rotates tokens for the session manager.
///
/// The HTTP implementation lives in `f3s-client`; tests substitute stubs.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchanges credentials for a token pair and the user profile.
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<LoginResponse>;

    /// Exchanges a refresh token for a new access token and a rotated refresh token.
    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair>;
}
