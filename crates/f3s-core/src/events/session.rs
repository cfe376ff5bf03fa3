//! Session lifecycle events.

use serde::{Deserialize, Serialize};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutReason {
    /// The user asked to log out.
    UserRequested,
    /// The refresh call failed, which always terminates the session.
    RefreshFailed,
}

impl std::fmt::Display for LogoutReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutReason::UserRequested => write!(f, "user_requested"),
            LogoutReason::RefreshFailed => write!(f, "refresh_failed"),
        }
    }
}

/// Events related to the client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Login succeeded and all session slots were written.
    LoggedIn {
        /// The username of the profile captured at login.
        username: String,
    },
    /// The access token was replaced and the refresh token rotated.
    Refreshed,
    /// All session slots were cleared. Subscribers discard in-memory state.
    LoggedOut {
        /// Why the session ended.
        reason: LogoutReason,
    },
}
