//! Route guard gating protected views on a confirmed session.
//!
//! A guard is mounted once per protected view. The mount check publishes
//! `Loading`, then settles on `Authenticated` or `Redirect`; it is never
//! re-run on a timer.

use std::sync::Arc;

use tokio::sync::{OnceCell, broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use f3s_core::events::SessionEvent;

use crate::session::SessionManager;

/// Observable state of a [`RouteGuard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// The mount check is in flight.
    Loading,
    /// The session is confirmed; protected content may render.
    Authenticated,
    /// No usable session; the caller should navigate to this route.
    Redirect(String),
}

/// What to show for the current guard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T, F> {
    /// Loading indicator.
    Loading,
    /// Protected content.
    Content(T),
    /// Caller-supplied fallback shown while redirecting.
    Fallback(F),
}

/// Blocks protected content until the session manager confirms a session.
pub struct RouteGuard {
    manager: Arc<SessionManager>,
    login_route: String,
    state: watch::Sender<GuardState>,
    mounted: OnceCell<GuardState>,
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("login_route", &self.login_route)
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl RouteGuard {
    /// Creates an unmounted guard redirecting to `login_route`.
    pub fn new(manager: Arc<SessionManager>, login_route: impl Into<String>) -> Self {
        let (state, _) = watch::channel(GuardState::Loading);
        Self {
            manager,
            login_route: login_route.into(),
            state,
            mounted: OnceCell::new(),
        }
    }

    /// The route unauthenticated callers are sent to.
    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Receives every state the guard publishes.
    pub fn watch(&self) -> watch::Receiver<GuardState> {
        self.state.subscribe()
    }

    /// The most recently published state.
    pub fn current(&self) -> GuardState {
        self.state.borrow().clone()
    }

    /// Runs the mount check. Later calls return the first outcome.
    pub async fn check(&self) -> GuardState {
        self.mounted.get_or_init(|| self.evaluate()).await.clone()
    }

    /// Picks the view for the current state.
    pub fn render<T, F>(
        &self,
        content: impl FnOnce() -> T,
        fallback: impl FnOnce() -> F,
    ) -> GuardView<T, F> {
        match self.current() {
            GuardState::Loading => GuardView::Loading,
            GuardState::Authenticated => GuardView::Content(content()),
            GuardState::Redirect(_) => GuardView::Fallback(fallback()),
        }
    }

    /// Redirects as soon as the session manager reports a logout.
    ///
    /// The task holds only a weak reference and ends once the guard is
    /// dropped or the manager's event channel closes.
    pub fn spawn_logout_watch(self: &Arc<Self>) -> JoinHandle<()> {
        let guard = Arc::downgrade(self);
        let mut dropped = self.state.subscribe();
        let mut events = self.manager.subscribe();
        tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    event = events.recv() => event,
                    changed = dropped.changed() => match changed {
                        Ok(()) => continue,
                        Err(_) => break,
                    },
                };

                match event {
                    Ok(SessionEvent::LoggedOut { reason }) => {
                        let Some(guard) = guard.upgrade() else { break };
                        info!(%reason, route = %guard.login_route, "Session ended, redirecting");
                        guard.publish(GuardState::Redirect(guard.login_route.clone()));
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!(skipped, "Guard lagged behind session events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            debug!("Logout watch stopped");
        })
    }

    async fn evaluate(&self) -> GuardState {
        self.publish(GuardState::Loading);

        let outcome = if !self.manager.has_session() || self.manager.stored_user().is_none() {
            debug!("No stored session");
            self.redirect()
        } else if self.manager.is_token_expired() {
            match self.manager.refresh().await {
                Ok(()) => GuardState::Authenticated,
                Err(_) => self.redirect(),
            }
        } else {
            GuardState::Authenticated
        };

        self.publish(outcome.clone());
        outcome
    }

    fn redirect(&self) -> GuardState {
        GuardState::Redirect(self.login_route.clone())
    }

    fn publish(&self, state: GuardState) {
        self.state.send_replace(state);
    }
}
