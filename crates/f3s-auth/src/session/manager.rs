//! Session lifecycle manager: login, logout, refresh, and freshness queries.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use validator::Validate;

use f3s_core::config::SessionConfig;
use f3s_core::events::{LogoutReason, SessionEvent};
use f3s_core::{AppError, AppResult};

use crate::backend::AuthBackend;
use crate::jwt::codec;

use super::model::{LoginCredentials, UserProfile};
use super::store::{SessionStore, SessionStoreExt};

/// Capacity of the session event channel.
const EVENT_CHANNEL_CAPACITY: usize = 32;

type RefreshFlight = Shared<BoxFuture<'static, AppResult<()>>>;

/// Where the stored session sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No access token or no user is stored.
    Unauthenticated,
    /// The access token is comfortably within its lifetime.
    Valid,
    /// The access token expires within the proactive refresh window.
    NearExpiry,
    /// The access token is past its expiry margin or cannot be decoded.
    Expired,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::Valid => write!(f, "valid"),
            Self::NearExpiry => write!(f, "near_expiry"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Orchestrates the session over an injected store and auth backend.
///
/// Concurrent [`refresh`](Self::refresh) calls on one manager share a single
/// backend round trip.
pub struct SessionManager {
    /// Slot persistence.
    store: Arc<dyn SessionStore>,
    /// Token issuer.
    backend: Arc<dyn AuthBackend>,
    /// Refresh thresholds.
    config: SessionConfig,
    /// Lifecycle event fan-out.
    events: broadcast::Sender<SessionEvent>,
    /// The refresh currently awaiting the backend, if any.
    in_flight: Mutex<Option<RefreshFlight>>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        store: Arc<dyn SessionStore>,
        backend: Arc<dyn AuthBackend>,
        config: SessionConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            backend,
            config,
            events,
            in_flight: Mutex::new(None),
        }
    }

    /// Subscribes to session lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// The injected store.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Exchanges credentials for a session and persists it.
    ///
    /// Backend errors are returned unchanged, message included. No retry.
    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<UserProfile> {
        credentials.validate()?;

        let response = self.backend.login(credentials).await.map_err(|e| {
            warn!(username = %credentials.username, error = %e, "Login failed");
            e
        })?;

        self.store.save_login(&response)?;

        info!(
            username = %response.user.username,
            expires_in = response.expires_in,
            "Login successful"
        );
        let _ = self.events.send(SessionEvent::LoggedIn {
            username: response.user.username.clone(),
        });

        Ok(response.user)
    }

    /// Clears every session slot.
    pub fn logout(&self) -> AppResult<()> {
        terminate(&self.store, &self.events, LogoutReason::UserRequested)
    }

    /// Rotates the token pair using the stored refresh token.
    ///
    /// Fails with a `Session` error, without contacting the backend, when no
    /// refresh token is stored. Any other failure logs the session out.
    pub async fn refresh(&self) -> AppResult<()> {
        let flight = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
            match in_flight.as_ref() {
                Some(existing) => {
                    debug!("Joining in-flight token refresh");
                    existing.clone()
                }
                None => {
                    let refresh_token = self
                        .store
                        .refresh_token()
                        .ok_or_else(|| AppError::session("No refresh token available"))?;
                    let flight = run_refresh(
                        Arc::clone(&self.store),
                        Arc::clone(&self.backend),
                        self.events.clone(),
                        refresh_token,
                    )
                    .boxed()
                    .shared();
                    *in_flight = Some(flight.clone());
                    flight
                }
            }
        };

        let result = flight.clone().await;

        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if in_flight
            .as_ref()
            .is_some_and(|current| Shared::ptr_eq(current, &flight))
        {
            *in_flight = None;
        }

        result
    }

    /// Returns an access token that is not expired at call time.
    ///
    /// Refreshes reactively when the token is expired and proactively when
    /// less than `proactive_refresh_seconds` remain. `None` when there is no
    /// session, the refresh fails, or the refreshed token is itself expired.
    pub async fn valid_token(&self) -> Option<String> {
        let token = self.store.access_token()?;
        let now = Utc::now().timestamp();

        let expired = codec::is_expired_at(&token, now);
        let remaining = codec::time_until_expiry_at(&token, now) as i64;
        if !expired && remaining >= self.config.proactive_refresh_seconds {
            return Some(token);
        }

        debug!(expired, remaining, "Access token needs refresh");
        match self.refresh().await {
            Ok(()) => {
                let refreshed = self
                    .store
                    .access_token()
                    .filter(|token| !codec::is_expired(token));
                if refreshed.is_none() {
                    warn!("Refreshed access token is already expired");
                }
                refreshed
            }
            Err(e) => {
                warn!(error = %e, "Could not obtain a valid token");
                None
            }
        }
    }

    /// Whether an access token is stored, regardless of expiry.
    pub fn has_session(&self) -> bool {
        self.store.has_access_token()
    }

    /// Whether a user is stored alongside a non-expired access token.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Valid | SessionState::NearExpiry)
    }

    /// The profile captured at login.
    pub fn stored_user(&self) -> Option<UserProfile> {
        self.store.stored_user()
    }

    /// The raw stored access token.
    pub fn access_token(&self) -> Option<String> {
        self.store.access_token()
    }

    /// The raw stored refresh token.
    pub fn refresh_token(&self) -> Option<String> {
        self.store.refresh_token()
    }

    /// Whether the stored access token is expired (true without a token).
    pub fn is_token_expired(&self) -> bool {
        self.store
            .access_token()
            .is_none_or(|token| codec::is_expired(&token))
    }

    /// The lifecycle state at the current time.
    pub fn state(&self) -> SessionState {
        self.state_at(Utc::now().timestamp())
    }

    /// The lifecycle state at `now` (Unix seconds).
    pub fn state_at(&self, now: i64) -> SessionState {
        let token = match self.store.access_token() {
            Some(token) if self.store.stored_user().is_some() => token,
            _ => return SessionState::Unauthenticated,
        };

        if codec::is_expired_at(&token, now) {
            SessionState::Expired
        } else if (codec::time_until_expiry_at(&token, now) as i64)
            < self.config.proactive_refresh_seconds
        {
            SessionState::NearExpiry
        } else {
            SessionState::Valid
        }
    }
}

async fn run_refresh(
    store: Arc<dyn SessionStore>,
    backend: Arc<dyn AuthBackend>,
    events: broadcast::Sender<SessionEvent>,
    refresh_token: String,
) -> AppResult<()> {
    let outcome = match backend.refresh(&refresh_token).await {
        Ok(tokens) => store.save_tokens(&tokens),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => {
            info!("Access token refreshed");
            let _ = events.send(SessionEvent::Refreshed);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Token refresh failed, ending session");
            if let Err(clear_err) = terminate(&store, &events, LogoutReason::RefreshFailed) {
                warn!(error = %clear_err, "Failed to clear session after refresh failure");
            }
            Err(e)
        }
    }
}

fn terminate(
    store: &Arc<dyn SessionStore>,
    events: &broadcast::Sender<SessionEvent>,
    reason: LogoutReason,
) -> AppResult<()> {
    store.clear()?;
    info!(%reason, "Session cleared");
    let _ = events.send(SessionEvent::LoggedOut { reason });
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::session::store::{MemorySessionStore, SessionSlot};
    use crate::test_support::{StubBackend, token_expiring_in};

    fn manager_with(backend: Arc<StubBackend>) -> (SessionManager, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        let manager = SessionManager::new(store.clone(), backend, SessionConfig::default());
        (manager, store)
    }

    fn admin() -> LoginCredentials {
        LoginCredentials::new("admin", "admin123")
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let backend = Arc::new(StubBackend::new());
        let (manager, store) = manager_with(backend.clone());
        let mut events = manager.subscribe();

        let user = manager.login(&admin()).await.unwrap();

        assert_eq!(user, StubBackend::profile());
        assert!(manager.is_authenticated());
        assert_eq!(manager.stored_user(), Some(StubBackend::profile()));
        assert_eq!(store.len(), 3);
        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::LoggedIn { username: "admin".into() }
        );
    }

    #[tokio::test]
    async fn test_login_rejects_invalid_credentials_locally() {
        let backend = Arc::new(StubBackend::new());
        let (manager, _) = manager_with(backend.clone());

        let err = manager
            .login(&LoginCredentials::new("admin", "ab"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, f3s_core::ErrorKind::Validation);
        assert_eq!(backend.login_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_login_failure_keeps_backend_message() {
        let backend = Arc::new(StubBackend::new().failing_login("Invalid credentials"));
        let (manager, store) = manager_with(backend);

        let err = manager.login(&admin()).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message, "Invalid credentials");
        assert!(store.is_empty());
        assert!(!manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_all_slots() {
        let (manager, store) = manager_with(Arc::new(StubBackend::new()));
        manager.login(&admin()).await.unwrap();
        let mut events = manager.subscribe();

        manager.logout().unwrap();

        for slot in SessionSlot::ALL {
            assert!(store.get(slot).is_none());
        }
        assert!(!manager.is_authenticated());
        assert_eq!(manager.state(), SessionState::Unauthenticated);
        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::LoggedOut { reason: LogoutReason::UserRequested }
        );
    }

    #[tokio::test]
    async fn test_refresh_without_token_makes_no_call() {
        let backend = Arc::new(StubBackend::new());
        let (manager, _) = manager_with(backend.clone());

        let err = manager.refresh().await.unwrap_err();
        assert_eq!(err.kind, f3s_core::ErrorKind::Session);
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_refresh_rotates_tokens() {
        let backend = Arc::new(StubBackend::new());
        let (manager, store) = manager_with(backend.clone());
        manager.login(&admin()).await.unwrap();

        manager.refresh().await.unwrap();

        assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
        assert_eq!(manager.stored_user(), Some(StubBackend::profile()));
        assert!(manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_refresh_failure_logs_out() {
        let backend = Arc::new(StubBackend::new().failing_refresh());
        let (manager, store) = manager_with(backend);
        manager.login(&admin()).await.unwrap();
        let mut events = manager.subscribe();

        assert!(manager.refresh().await.is_err());

        assert!(!manager.is_authenticated());
        assert!(store.is_empty());
        assert_eq!(
            events.recv().await.unwrap(),
            SessionEvent::LoggedOut { reason: LogoutReason::RefreshFailed }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_refresh_is_single_flight() {
        let backend = Arc::new(StubBackend::new().with_refresh_delay(Duration::from_millis(50)));
        let (manager, _) = manager_with(backend.clone());
        manager.login(&admin()).await.unwrap();

        let results = futures::future::join_all((0..5).map(|_| manager.refresh())).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);

        manager.refresh().await.unwrap();
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_valid_token_skips_refresh_when_fresh() {
        let backend = Arc::new(StubBackend::new());
        let (manager, store) = manager_with(backend.clone());
        manager.login(&admin()).await.unwrap();

        let token = manager.valid_token().await.unwrap();
        assert_eq!(Some(token), store.access_token());
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_token_refreshes_near_expiry() {
        let backend = Arc::new(StubBackend::new());
        let (manager, store) = manager_with(backend.clone());
        manager.login(&admin()).await.unwrap();
        store
            .set(SessionSlot::AccessToken, &token_expiring_in(120))
            .unwrap();
        assert_eq!(manager.state(), SessionState::NearExpiry);

        let token = manager.valid_token().await.unwrap();

        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
        assert!(!codec::is_expired(&token));
        assert_eq!(manager.state(), SessionState::Valid);
    }

    #[tokio::test]
    async fn test_valid_token_none_when_refresh_fails() {
        let backend = Arc::new(StubBackend::new().failing_refresh());
        let (manager, store) = manager_with(backend);
        manager.login(&admin()).await.unwrap();
        store
            .set(SessionSlot::AccessToken, &token_expiring_in(-60))
            .unwrap();
        assert_eq!(manager.state(), SessionState::Expired);
        assert!(manager.has_session());
        assert!(!manager.is_authenticated());

        assert!(manager.valid_token().await.is_none());
        assert!(!manager.has_session());
    }

    #[tokio::test]
    async fn test_valid_token_rejects_expired_refresh_result() {
        let backend = Arc::new(StubBackend::new().with_refresh_lifetime(-100));
        let (manager, store) = manager_with(backend.clone());
        manager.login(&admin()).await.unwrap();
        store
            .set(SessionSlot::AccessToken, &token_expiring_in(-10))
            .unwrap();

        assert!(manager.valid_token().await.is_none());
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_valid_token_none_without_session() {
        let backend = Arc::new(StubBackend::new());
        let (manager, _) = manager_with(backend.clone());
        assert!(manager.valid_token().await.is_none());
        assert!(manager.is_token_expired());
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
    }
}
